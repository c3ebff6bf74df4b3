//! Property-based tests for the builders using proptest.

use proptest::prelude::*;

use bindery::{
    call, collapse, filter, get, set, BindError, Bindable, Fetched, FilterSpec, Invocations,
    Result as BindResult, SetSpec, Value,
};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Item {
    label: String,
    count: i64,
}

impl Bindable for Item {
    fn read_attr(&self, name: &str, args: &[Value]) -> BindResult<Value> {
        if !args.is_empty() {
            return Err(BindError::arity(name, 0, args.len()));
        }
        match name {
            "label" => Ok(Value::from(self.label.clone())),
            "count" => Ok(Value::from(self.count)),
            _ => Err(BindError::attribute_not_found::<Item>(name)),
        }
    }

    fn write_attr(&mut self, name: &str, value: Value) -> BindResult<()> {
        match name {
            "label" => {
                self.label = String::try_from(value)?;
                Ok(())
            }
            "count" => {
                self.count = i64::try_from(value)?;
                Ok(())
            }
            _ => Err(BindError::not_writable::<Item>(name)),
        }
    }
}

fn item_strategy() -> impl Strategy<Value = Item> {
    ("[a-z]{1,10}", any::<i64>()).prop_map(|(label, count)| Item { label, count })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A one-element list collapses to the bare value.
    #[test]
    fn collapse_singleton_unwraps(n in any::<i64>()) {
        prop_assert_eq!(collapse(vec![Value::from(n)]), Fetched::One(Value::from(n)));
    }

    /// Everything else stays a sequence, order intact.
    #[test]
    fn collapse_other_lengths_keep_order(
        numbers in prop::collection::vec(any::<i64>(), 0..20),
    ) {
        prop_assume!(numbers.len() != 1);
        let values: Vec<Value> = numbers.iter().copied().map(Value::from).collect();
        prop_assert_eq!(collapse(values.clone()), Fetched::Many(values));
    }

    /// The filter predicate equals the conjunction of its entry tests.
    #[test]
    fn filter_is_the_conjunction_of_entries(
        item in item_strategy(),
        label in "[a-z]{1,10}",
        count in any::<i64>(),
    ) {
        let pred = filter(FilterSpec::new().attr("label", label.as_str()).attr("count", count));
        let expected = item.label == label && item.count == count;
        prop_assert_eq!(pred(&item).unwrap(), expected);
    }

    /// Applying a filter never changes what the receiver's accessors report.
    #[test]
    fn filter_does_not_mutate(item in item_strategy(), count in any::<i64>()) {
        let before = item.clone();
        let pred = filter(FilterSpec::new().attr("count", count));
        let _ = pred(&item).unwrap();
        prop_assert_eq!(item, before);
    }

    /// An empty filter spec matches every receiver.
    #[test]
    fn empty_filter_matches_everything(item in item_strategy()) {
        let pred = filter(FilterSpec::new());
        prop_assert!(pred(&item).unwrap());
    }

    /// A one-entry get equals reading the accessor directly.
    #[test]
    fn single_get_equals_direct_read(item in item_strategy()) {
        let read = get(Invocations::new().method("count"));
        let direct = item.read_attr("count", &[]).unwrap();
        prop_assert_eq!(read(&item).unwrap(), Fetched::One(direct));
    }

    /// Multi-entry get returns one result per entry, in spec order.
    #[test]
    fn get_results_follow_spec_order(item in item_strategy()) {
        let read = get(Invocations::new().method("count").method("label"));
        prop_assert_eq!(
            read(&item).unwrap(),
            Fetched::Many(vec![
                Value::from(item.count),
                Value::from(item.label.clone()),
            ])
        );
    }

    /// After set, every written attribute reads back as the spec value.
    #[test]
    fn set_round_trips(
        mut item in item_strategy(),
        label in "[a-z]{1,10}",
        count in any::<i64>(),
    ) {
        let update = set(SetSpec::new().attr("label", label.as_str()).attr("count", count));
        update(&mut item).unwrap();
        prop_assert_eq!(item.label, label);
        prop_assert_eq!(item.count, count);
    }

    /// `sub` through call behaves like a first-occurrence replace and
    /// leaves the receiver untouched; `sub_mut` applies the same rewrite
    /// in place.
    #[test]
    fn call_sub_matches_replacen(
        s in "[a-z+]{0,12}",
        from in "[a-z]{1,2}",
        to in "[a-z]{0,2}",
    ) {
        let expected = s.replacen(&from, &to, 1);

        let mut word = s.clone();
        let swap = call(Invocations::new().method_with("sub", [from.as_str(), to.as_str()]));
        let result = swap(&mut word).unwrap();
        prop_assert_eq!(result, Value::from(expected.clone()));
        prop_assert_eq!(&word, &s);

        let swap_in_place =
            call(Invocations::new().method_with("sub_mut", [from.as_str(), to.as_str()]));
        swap_in_place(&mut word).unwrap();
        prop_assert_eq!(word, expected);
    }

    /// Reusing one bound function across a whole collection equals applying
    /// a fresh one per element.
    #[test]
    fn bound_functions_are_stateless(
        items in prop::collection::vec(item_strategy(), 0..20),
        count in any::<i64>(),
    ) {
        let shared = filter(FilterSpec::new().attr("count", count));
        for item in &items {
            let fresh = filter(FilterSpec::new().attr("count", count));
            prop_assert_eq!(shared(item).unwrap(), fresh(item).unwrap());
        }
    }
}

// ============================================================================
// Additional edge cases
// ============================================================================

#[test]
fn empty_invocation_spec_yields_empty_many() {
    let item = Item {
        label: "x".to_string(),
        count: 0,
    };
    let read = get(Invocations::new());
    assert_eq!(read(&item).unwrap(), Fetched::Many(Vec::new()));
}

#[test]
fn empty_set_spec_is_a_no_op() {
    let mut item = Item {
        label: "x".to_string(),
        count: 0,
    };
    let update = set(SetSpec::new());
    update(&mut item).unwrap();
    assert_eq!(item.label, "x");
    assert_eq!(item.count, 0);
}
