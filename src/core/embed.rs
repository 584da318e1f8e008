//! Parent/child wiring
//!
//! An embedding ties one child [`Unit`] into a parent: the field that holds the
//! child's state and the tag that wraps the child's messages. The parent
//! builds its `initial_state`, `render` and `update` from these pieces without
//! ever touching the child's state shape.
//!
//! Three shapes are covered:
//! - [`Embed`]: a single child in a named field
//! - [`EmbedSeq`]: a `Vec` of same-typed children addressed by position
//! - [`EmbedKeyed`]: a [`Keyed`] sequence addressed by stable [`ChildId`]

use std::marker::PhantomData;

use super::{
    address::Address,
    keyed::{ChildId, Keyed},
    unit::{ChildSlot, Unit},
    view::View,
};

/// Run `C::update` on the state behind `slot` in place
///
/// `update` takes the state by value, so the slot briefly holds
/// `C::initial_state()` while the child computes its replacement.
pub(crate) fn splice<C: Unit>(slot: &mut C::State, msg: C::Msg) {
    let current = std::mem::replace(slot, C::initial_state());
    *slot = C::update(msg, current);
}

/// A single child `C` embedded in a parent with state `PS` and messages `PM`
pub struct Embed<PS, PM, C: Unit> {
    name: &'static str,
    tag: fn(C::Msg) -> PM,
    field: fn(&PS) -> &C::State,
    field_mut: fn(&mut PS) -> &mut C::State,
    _child: PhantomData<fn() -> C>,
}

impl<PS, PM: 'static, C: Unit> Embed<PS, PM, C> {
    pub const fn new(
        name: &'static str,
        tag: fn(C::Msg) -> PM,
        field: fn(&PS) -> &C::State,
        field_mut: fn(&mut PS) -> &mut C::State,
    ) -> Self {
        Self {
            name,
            tag,
            field,
            field_mut,
            _child: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Starting state for the child's field
    pub fn init(&self) -> C::State {
        C::initial_state()
    }

    /// Wrap a child message in this child's tag
    pub fn wrap(&self, msg: C::Msg) -> PM {
        (self.tag)(msg)
    }

    pub fn state<'a>(&self, state: &'a PS) -> &'a C::State {
        (self.field)(state)
    }

    /// The field this embedding reaches in `state`, for [`Unit::children`]
    pub fn slot(&self, state: &PS) -> ChildSlot {
        ChildSlot::of(self.name, self.state(state))
    }

    /// Forwarding address for the child
    pub fn forward(&self, address: &Address<PM>) -> Address<C::Msg> {
        address.forward(self.tag)
    }

    pub fn render(&self, address: &Address<PM>, state: &PS) -> View {
        C::render(&self.forward(address), self.state(state))
    }

    /// Delegate `msg` to the child and splice its new state back in
    pub fn update(&self, msg: C::Msg, mut state: PS) -> PS {
        tracing::trace!(child = self.name, ?msg, "delegating update");
        splice::<C>((self.field_mut)(&mut state), msg);
        state
    }
}

/// A `Vec` of same-typed children, addressed by position
///
/// The tag carries the index so that `update` can find exactly one element.
pub struct EmbedSeq<PS, PM, C: Unit> {
    name: &'static str,
    tag: fn(usize, C::Msg) -> PM,
    field: fn(&PS) -> &Vec<C::State>,
    field_mut: fn(&mut PS) -> &mut Vec<C::State>,
    _child: PhantomData<fn() -> C>,
}

impl<PS, PM: 'static, C: Unit> EmbedSeq<PS, PM, C> {
    pub const fn new(
        name: &'static str,
        tag: fn(usize, C::Msg) -> PM,
        field: fn(&PS) -> &Vec<C::State>,
        field_mut: fn(&mut PS) -> &mut Vec<C::State>,
    ) -> Self {
        Self {
            name,
            tag,
            field,
            field_mut,
            _child: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// `count` freshly initialised children
    pub fn init(&self, count: usize) -> Vec<C::State> {
        (0..count).map(|_| C::initial_state()).collect()
    }

    pub fn wrap(&self, index: usize, msg: C::Msg) -> PM {
        (self.tag)(index, msg)
    }

    pub fn states<'a>(&self, state: &'a PS) -> &'a [C::State] {
        (self.field)(state)
    }

    pub fn slot(&self, state: &PS) -> ChildSlot {
        ChildSlot::of(self.name, (self.field)(state))
    }

    pub fn forward(&self, address: &Address<PM>, index: usize) -> Address<C::Msg> {
        let tag = self.tag;
        address.forward(move |msg| tag(index, msg))
    }

    /// Render every child with its own forwarding address, in order
    pub fn render_all(&self, address: &Address<PM>, state: &PS) -> Vec<View> {
        self.states(state)
            .iter()
            .enumerate()
            .map(|(index, child)| C::render(&self.forward(address, index), child))
            .collect()
    }

    /// Delegate to the child at `index`; out-of-range indices leave `state` untouched
    pub fn update(&self, index: usize, msg: C::Msg, mut state: PS) -> PS {
        let children = (self.field_mut)(&mut state);
        match children.get_mut(index) {
            Some(slot) => {
                tracing::trace!(child = self.name, index, ?msg, "delegating update");
                splice::<C>(slot, msg);
            }
            None => {
                tracing::warn!(
                    child = self.name,
                    index,
                    len = children.len(),
                    ?msg,
                    "ignoring message for out-of-range child"
                );
            }
        }
        state
    }
}

/// A [`Keyed`] sequence of same-typed children, addressed by [`ChildId`]
pub struct EmbedKeyed<PS, PM, C: Unit> {
    name: &'static str,
    tag: fn(ChildId, C::Msg) -> PM,
    field: fn(&PS) -> &Keyed<C::State>,
    field_mut: fn(&mut PS) -> &mut Keyed<C::State>,
    _child: PhantomData<fn() -> C>,
}

impl<PS, PM: 'static, C: Unit> EmbedKeyed<PS, PM, C> {
    pub const fn new(
        name: &'static str,
        tag: fn(ChildId, C::Msg) -> PM,
        field: fn(&PS) -> &Keyed<C::State>,
        field_mut: fn(&mut PS) -> &mut Keyed<C::State>,
    ) -> Self {
        Self {
            name,
            tag,
            field,
            field_mut,
            _child: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn init(&self, count: usize) -> Keyed<C::State> {
        (0..count).map(|_| C::initial_state()).collect()
    }

    pub fn wrap(&self, id: ChildId, msg: C::Msg) -> PM {
        (self.tag)(id, msg)
    }

    pub fn states<'a>(&self, state: &'a PS) -> &'a Keyed<C::State> {
        (self.field)(state)
    }

    pub fn slot(&self, state: &PS) -> ChildSlot {
        ChildSlot::of(self.name, self.states(state))
    }

    /// Mutable access to the sequence itself, for inserting and removing children
    pub fn states_mut<'a>(&self, state: &'a mut PS) -> &'a mut Keyed<C::State> {
        (self.field_mut)(state)
    }

    pub fn forward(&self, address: &Address<PM>, id: ChildId) -> Address<C::Msg> {
        let tag = self.tag;
        address.forward(move |msg| tag(id, msg))
    }

    pub fn render_all(&self, address: &Address<PM>, state: &PS) -> Vec<(ChildId, View)> {
        self.states(state)
            .iter()
            .map(|(id, child)| (id, C::render(&self.forward(address, id), child)))
            .collect()
    }

    /// Delegate to the child with `id`; unknown ids leave `state` untouched
    pub fn update(&self, id: ChildId, msg: C::Msg, mut state: PS) -> PS {
        match (self.field_mut)(&mut state).get_mut(id) {
            Some(slot) => {
                tracing::trace!(child = self.name, %id, ?msg, "delegating update");
                splice::<C>(slot, msg);
            }
            None => {
                // The child was removed after this message was emitted
                tracing::warn!(child = self.name, %id, ?msg, "ignoring message for unknown child");
            }
        }
        state
    }
}
