use std::{fmt::Debug, mem};

use color_eyre::eyre::{bail, Result};

use super::{address::Address, view::View};

/// A self-contained state/update/render triple
///
/// Implementors know nothing about where they are embedded. All functions are
/// associated functions without `self`: a unit is a type, its state is a value.
///
/// `update` must be total over `Self::Msg` and must not panic. It receives the
/// state by value and returns the replacement.
pub trait Unit {
    type State: Clone + PartialEq + Debug;
    type Msg: Clone + Debug + Send + 'static;

    fn initial_state() -> Self::State;

    fn render(address: &Address<Self::Msg>, state: &Self::State) -> View;

    fn update(msg: Self::Msg, state: Self::State) -> Self::State;

    /// Where each embedded child lives inside `state`
    ///
    /// Composites build this from their embeddings (`Embed::slot` and friends);
    /// leaf units return an empty list.
    fn children(state: &Self::State) -> Vec<ChildSlot>;
}

/// Name and memory range of one embedded child field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildSlot {
    name: &'static str,
    start: usize,
    len: usize,
}

impl ChildSlot {
    pub fn of<T>(name: &'static str, field: &T) -> Self {
        Self {
            name,
            start: (field as *const T) as usize,
            len: mem::size_of::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Zero-sized fields never overlap anything
    fn overlaps(&self, other: &ChildSlot) -> bool {
        self.len > 0
            && other.len > 0
            && self.start < other.start + other.len
            && other.start < self.start + self.len
    }
}

/// Definition-time check over the embeddings of `U`
///
/// Rejects two children with the same name and two embeddings that reach the
/// same state field, since a message tagged for one would update the other.
pub fn ensure_distinct_children<U: Unit>(state: &U::State) -> Result<()> {
    let slots = U::children(state);
    for (index, slot) in slots.iter().enumerate() {
        for earlier in &slots[..index] {
            if earlier.name == slot.name {
                bail!(
                    "{} embeds more than one child named `{}`",
                    std::any::type_name::<U>(),
                    slot.name
                );
            }
            if earlier.overlaps(slot) {
                bail!(
                    "{} embeds `{}` and `{}` over the same state field",
                    std::any::type_name::<U>(),
                    earlier.name,
                    slot.name
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf;

    impl Unit for Leaf {
        type State = u8;
        type Msg = ();

        fn initial_state() -> u8 {
            0
        }

        fn render(_address: &Address<()>, state: &u8) -> View {
            View::text(state.to_string())
        }

        fn update(_msg: (), state: u8) -> u8 {
            state.wrapping_add(1)
        }

        fn children(_state: &u8) -> Vec<ChildSlot> {
            Vec::new()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Fields {
        first: u32,
        second: u32,
        nothing: (),
        also_nothing: (),
    }

    /// Reports whatever slots the test asks for
    struct Described<const CASE: u8>;

    impl<const CASE: u8> Unit for Described<CASE> {
        type State = Fields;
        type Msg = ();

        fn initial_state() -> Fields {
            Fields {
                first: 1,
                second: 2,
                nothing: (),
                also_nothing: (),
            }
        }

        fn render(_address: &Address<()>, _state: &Fields) -> View {
            View::column([])
        }

        fn update(_msg: (), state: Fields) -> Fields {
            state
        }

        fn children(state: &Fields) -> Vec<ChildSlot> {
            match CASE {
                0 => vec![
                    ChildSlot::of("first", &state.first),
                    ChildSlot::of("second", &state.second),
                ],
                1 => vec![
                    ChildSlot::of("first", &state.first),
                    ChildSlot::of("first", &state.second),
                ],
                2 => vec![
                    ChildSlot::of("first", &state.first),
                    ChildSlot::of("alias", &state.first),
                ],
                _ => vec![
                    ChildSlot::of("nothing", &state.nothing),
                    ChildSlot::of("also_nothing", &state.also_nothing),
                ],
            }
        }
    }

    fn check<const CASE: u8>() -> Result<()> {
        ensure_distinct_children::<Described<CASE>>(&Described::<CASE>::initial_state())
    }

    #[test]
    fn test_leaf_has_no_children() {
        assert!(Leaf::children(&0).is_empty());
        assert!(ensure_distinct_children::<Leaf>(&0).is_ok());
    }

    #[test]
    fn test_distinct_fields_accepted() {
        assert!(check::<0>().is_ok());
        assert!(check::<3>().is_ok());
    }

    #[test]
    fn test_duplicate_child_names_rejected() {
        let err = check::<1>().unwrap_err();

        assert!(err.to_string().contains("more than one child named `first`"));
    }

    #[test]
    fn test_shared_field_rejected() {
        let err = check::<2>().unwrap_err();

        assert!(err.to_string().contains("`first` and `alias`"));
    }

    #[test]
    fn test_slot_overlap() {
        let pair = (1u64, 2u64);
        let whole = ChildSlot::of("whole", &pair);
        let left = ChildSlot::of("left", &pair.0);
        let right = ChildSlot::of("right", &pair.1);

        assert!(whole.overlaps(&left));
        assert!(whole.overlaps(&right));
        assert!(!left.overlaps(&right));
        assert_eq!(left.name(), "left");
    }
}
