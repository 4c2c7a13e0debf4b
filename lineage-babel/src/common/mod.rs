//! Helpers shared by the output formats

pub mod roman;

use lineage_parser::ChildRef;

/// 1-based ordinal slot of every child. Continuation entries share the slot of the child they
/// describe.
pub fn child_ordinals(children: &[ChildRef]) -> Vec<usize> {
    let mut slot = 0;
    children
        .iter()
        .map(|child| {
            if child.has_ordinal || slot == 0 {
                slot += 1;
            }
            slot
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_parser::RichText;

    fn child(has_ordinal: bool) -> ChildRef {
        ChildRef {
            id: None,
            text: RichText::plain("x"),
            has_ordinal,
            is_linked: false,
        }
    }

    #[test]
    fn test_continuations_share_the_previous_slot() {
        let children = vec![child(true), child(false), child(true), child(true)];
        assert_eq!(child_ordinals(&children), vec![1, 1, 2, 3]);
    }

    #[test]
    fn test_leading_continuation_gets_a_slot() {
        assert_eq!(child_ordinals(&[child(false), child(true)]), vec![1, 2]);
    }
}
