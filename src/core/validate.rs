use crate::domain::model::ArgumentItem;
use crate::utils::error::{MenuError, Result};

/// Rejects queries the dispatcher must never see. Checks run in a fixed
/// order and the first failure wins:
///
/// 1. the query must not be empty,
/// 2. no `Unknown` items (all of them reported together),
/// 3. no `Malformed` items,
/// 4. `--help` and `--order` must stand alone,
/// 5. at most one of `--today` / `--week`.
pub fn validate_query(items: &[ArgumentItem]) -> Result<()> {
    if items.is_empty() {
        return Err(MenuError::EmptyQuery);
    }

    let unknown: Vec<String> = items
        .iter()
        .filter_map(|item| match item {
            ArgumentItem::Unknown(token) => Some(token.clone()),
            _ => None,
        })
        .collect();
    if !unknown.is_empty() {
        return Err(MenuError::UnknownArguments { tokens: unknown });
    }

    if let Some(diagnostic) = items.iter().find_map(|item| match item {
        ArgumentItem::Malformed(diagnostic) => Some(diagnostic.clone()),
        _ => None,
    }) {
        return Err(MenuError::InvalidQuery { message: diagnostic });
    }

    if items.iter().any(|item| item.is_standalone_instruction()) && items.len() > 1 {
        return Err(MenuError::InvalidQuery {
            message: "--help and --order cannot be combined with other arguments".to_string(),
        });
    }

    let temporal = items.iter().filter(|item| item.is_temporal_constraint()).count();
    if temporal > 1 {
        return Err(MenuError::InvalidQuery {
            message: "give at most one of --today and --week".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Day;

    fn meal(name: &str) -> ArgumentItem {
        ArgumentItem::Meal(name.to_string())
    }

    #[test]
    fn empty_query_is_rejected() {
        assert!(matches!(validate_query(&[]), Err(MenuError::EmptyQuery)));
    }

    #[test]
    fn all_unknown_tokens_are_reported_together() {
        let items = vec![
            ArgumentItem::Unknown("--menu".to_string()),
            ArgumentItem::Week,
            ArgumentItem::Unknown("extra".to_string()),
        ];

        match validate_query(&items) {
            Err(MenuError::UnknownArguments { tokens }) => {
                assert_eq!(tokens, vec!["--menu".to_string(), "extra".to_string()]);
            }
            other => panic!("expected unknown arguments, got {:?}", other),
        }
    }

    #[test]
    fn unknown_items_outrank_malformed_ones() {
        let items = vec![
            ArgumentItem::Unknown("--menu".to_string()),
            ArgumentItem::Malformed("--meal expects a value".to_string()),
        ];

        assert!(matches!(
            validate_query(&items),
            Err(MenuError::UnknownArguments { .. })
        ));
    }

    #[test]
    fn malformed_item_surfaces_its_diagnostic() {
        let items = vec![ArgumentItem::Malformed("--meal expects a value".to_string())];

        match validate_query(&items) {
            Err(MenuError::InvalidQuery { message }) => {
                assert_eq!(message, "--meal expects a value");
            }
            other => panic!("expected an invalid query, got {:?}", other),
        }
    }

    #[test]
    fn help_must_stand_alone() {
        let items = vec![ArgumentItem::Help, ArgumentItem::Week];
        assert!(matches!(
            validate_query(&items),
            Err(MenuError::InvalidQuery { .. })
        ));
    }

    #[test]
    fn order_must_stand_alone() {
        let items = vec![meal("curry"), ArgumentItem::Order];
        assert!(matches!(
            validate_query(&items),
            Err(MenuError::InvalidQuery { .. })
        ));
    }

    #[test]
    fn lone_help_and_lone_order_pass() {
        assert!(validate_query(&[ArgumentItem::Help]).is_ok());
        assert!(validate_query(&[ArgumentItem::Order]).is_ok());
    }

    #[test]
    fn two_temporal_constraints_are_rejected() {
        let items = vec![ArgumentItem::Day(Day::Monday), ArgumentItem::Week];
        assert!(matches!(
            validate_query(&items),
            Err(MenuError::InvalidQuery { .. })
        ));
    }

    #[test]
    fn one_temporal_constraint_with_meals_passes() {
        let items = vec![ArgumentItem::Week, meal("curry"), meal("riz")];
        assert!(validate_query(&items).is_ok());
    }

    #[test]
    fn lone_day_and_lone_week_pass() {
        assert!(validate_query(&[ArgumentItem::Day(Day::Friday)]).is_ok());
        assert!(validate_query(&[ArgumentItem::Week]).is_ok());
    }
}
