//! Shared actor handles

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use super::{Actor, ActorId, DrawContext, UpdateContext};
use crate::physics::collision::{intersects, ContactMode};
use crate::render::Canvas;
use crate::stage::{Stage, StageError, WeakStage};

struct ActorNode {
    id: ActorId,
    kind: String,
    mount: RefCell<Option<WeakStage>>,
    body: RefCell<Box<dyn Actor>>,
}

/// Reference-counted handle to an actor
///
/// The stage keeps one handle per mounted actor; game code may hold more.
/// Identity, kind and mount state are readable without borrowing the actor
/// body, so they stay available while the actor is mid-update.
#[derive(Clone)]
pub struct ActorRef {
    node: Rc<ActorNode>,
}

impl ActorRef {
    /// Wrap a freshly constructed (unmounted) actor
    pub fn new<A: Actor>(actor: A) -> Self {
        Self {
            node: Rc::new(ActorNode {
                id: actor.id(),
                kind: actor.kind().to_owned(),
                mount: RefCell::new(None),
                body: RefCell::new(Box::new(actor)),
            }),
        }
    }

    /// Identity
    pub fn id(&self) -> ActorId {
        self.node.id
    }

    /// Category label
    pub fn kind(&self) -> &str {
        &self.node.kind
    }

    /// Stage this actor is mounted on, if any
    pub fn stage(&self) -> Option<Stage> {
        self.node.mount.borrow().as_ref().and_then(WeakStage::upgrade)
    }

    /// Whether the actor is mounted on a live stage
    pub fn is_mounted(&self) -> bool {
        self.stage().is_some()
    }

    /// Whether the actor is mounted on `stage` specifically
    pub fn is_mounted_on(&self, stage: &Stage) -> bool {
        self.node
            .mount
            .borrow()
            .as_ref()
            .is_some_and(|weak| weak.points_to(stage))
    }

    pub(crate) fn set_mount(&self, mount: Option<WeakStage>) {
        *self.node.mount.borrow_mut() = mount;
    }

    /// Whether two handles refer to the same actor instance
    pub fn ptr_eq(&self, other: &ActorRef) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Borrow the actor body
    ///
    /// # Panics
    ///
    /// Panics if the actor is currently borrowed mutably, which is the case
    /// for the actor running its own update.
    pub fn borrow(&self) -> Ref<'_, dyn Actor> {
        Ref::map(self.node.body.borrow(), |body| &**body)
    }

    /// Mutably borrow the actor body
    ///
    /// # Panics
    ///
    /// Panics if the actor is already borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, dyn Actor> {
        RefMut::map(self.node.body.borrow_mut(), |body| &mut **body)
    }

    /// Run `f` on the body if it is of concrete kind `T`
    pub fn with<T: Actor, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let body = self.borrow();
        let actor: &dyn Actor = &*body;
        actor.as_any().downcast_ref::<T>().map(f)
    }

    /// Run `f` on the mutable body if it is of concrete kind `T`
    pub fn with_mut<T: Actor, R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut body = self.borrow_mut();
        let actor: &mut dyn Actor = &mut *body;
        actor.as_any_mut().downcast_mut::<T>().map(f)
    }

    /// Whether the body is of concrete kind `T`
    pub fn is<T: Actor>(&self) -> bool {
        self.with(|_: &T| ()).is_some()
    }

    /// Whether this actor overlaps `other`; never true for the same actor
    pub fn intersects(&self, other: &ActorRef, mode: ContactMode) -> bool {
        if self.ptr_eq(other) {
            return false;
        }
        intersects(&*self.borrow(), &*other.borrow(), mode)
    }

    /// Whether this actor overlaps `actor`, typically the one mid-update
    ///
    /// The id check comes first, so passing an actor's own body while it is
    /// borrowed is safe and yields `false`.
    pub fn intersects_actor(&self, actor: &dyn Actor, mode: ContactMode) -> bool {
        if self.id() == actor.id() {
            return false;
        }
        intersects(&*self.borrow(), actor, mode)
    }

    pub(crate) fn update(&self, dt: f32, stage: &Stage) -> Result<(), StageError> {
        let ctx = UpdateContext::new(stage, self);
        self.node.body.borrow_mut().update(dt, &ctx)
    }

    pub(crate) fn draw(&self, stage: &Stage, canvas: &mut dyn Canvas) {
        let mut ctx = DrawContext::new(stage, canvas);
        self.node.body.borrow().draw(&mut ctx);
    }
}

impl PartialEq for ActorRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ActorRef {}

impl fmt::Debug for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorRef")
            .field("id", &self.node.id)
            .field("kind", &self.node.kind)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
