use shared_types::{ActionItem, PartitionedActions};

/// Splits links into payment providers and external links.
///
/// Stable: each group keeps the owner's relative order. Phone and email are
/// not part of either group; they are rendered as separate contact rails,
/// so a stray phone/email item lands in `external` like any other non-payment.
pub fn partition(items: &[ActionItem]) -> PartitionedActions {
    let (payments, external): (Vec<ActionItem>, Vec<ActionItem>) = items
        .iter()
        .cloned()
        .partition(|item| item.action_type.is_payment());

    PartitionedActions { payments, external }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ActionType;

    fn item(id: &str, action_type: ActionType) -> ActionItem {
        ActionItem {
            id: id.to_string(),
            action_type,
            label: None,
            value: id.to_string(),
            url: None,
        }
    }

    fn ids(items: &[ActionItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_partition_routes_by_type() {
        let list = vec![
            item("ig", ActionType::Instagram),
            item("venmo", ActionType::Venmo),
            item("site", ActionType::Website),
            item("paypal", ActionType::Paypal),
            item("cash", ActionType::Cashapp),
            item("phone", ActionType::Phone),
        ];

        let split = partition(&list);
        assert_eq!(ids(&split.payments), vec!["venmo", "paypal", "cash"]);
        assert_eq!(ids(&split.external), vec!["ig", "site", "phone"]);
    }

    #[test]
    fn test_partition_is_stable_for_all_orders() {
        let base = [
            item("a", ActionType::Venmo),
            item("b", ActionType::X),
            item("c", ActionType::Cashapp),
        ];
        let orders = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];

        for order in orders {
            let list: Vec<ActionItem> = order.iter().map(|&i| base[i].clone()).collect();
            let split = partition(&list);

            let expected_payments: Vec<&str> = ids(&list)
                .into_iter()
                .filter(|id| *id != "b")
                .collect();
            assert_eq!(ids(&split.payments), expected_payments);
            assert_eq!(ids(&split.external), vec!["b"]);
        }
    }

    #[test]
    fn test_partition_empty() {
        assert_eq!(partition(&[]), PartitionedActions::default());
    }
}
