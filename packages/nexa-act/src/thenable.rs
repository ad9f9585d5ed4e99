use crate::error::ActError;
use nexa_scheduler::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;

/// Callback receiving the outcome of an awaitable.
pub type Settle<T> = Box<dyn FnOnce(Result<T, ActError>)>;

/// Capability of delivering one eventual result to one subscriber.
pub trait Thenable<T> {
    fn then(self: Box<Self>, settle: Settle<T>);
}

/// What an act body hands back: a value now, or one later.
pub enum Awaitable<T> {
    Resolved(T),
    Pending(Box<dyn Thenable<T>>),
}

impl<T> Awaitable<T> {
    pub fn resolved(value: T) -> Self {
        Awaitable::Resolved(value)
    }

    pub fn pending(thenable: impl Thenable<T> + 'static) -> Self {
        Awaitable::Pending(Box::new(thenable))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Awaitable::Pending(_))
    }
}

enum Slot<T> {
    Empty,
    Waiting(Settle<T>),
    Ready(Result<T, ActError>),
    Done,
}

/// Single-consumer promise. Settlement is always delivered on a microtask of
/// the scheduler it was created with, never inline.
pub struct Promise<T> {
    slot: Rc<RefCell<Slot<T>>>,
    scheduler: Rc<dyn Scheduler>,
}

/// Settling half of a [`Promise`].
pub struct Resolver<T> {
    slot: Rc<RefCell<Slot<T>>>,
    scheduler: Rc<dyn Scheduler>,
}

impl<T: 'static> Promise<T> {
    pub fn pending(scheduler: Rc<dyn Scheduler>) -> (Promise<T>, Resolver<T>) {
        let slot = Rc::new(RefCell::new(Slot::Empty));
        let promise = Promise {
            slot: slot.clone(),
            scheduler: scheduler.clone(),
        };
        (promise, Resolver { slot, scheduler })
    }

    pub fn resolved(scheduler: Rc<dyn Scheduler>, value: T) -> Promise<T> {
        Self::settled(scheduler, Ok(value))
    }

    pub fn rejected(scheduler: Rc<dyn Scheduler>, err: ActError) -> Promise<T> {
        Self::settled(scheduler, Err(err))
    }

    fn settled(scheduler: Rc<dyn Scheduler>, result: Result<T, ActError>) -> Promise<T> {
        Promise {
            slot: Rc::new(RefCell::new(Slot::Ready(result))),
            scheduler,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(*self.slot.borrow(), Slot::Ready(_) | Slot::Done)
    }
}

impl<T: 'static> Thenable<T> for Promise<T> {
    fn then(self: Box<Self>, settle: Settle<T>) {
        let previous = std::mem::replace(&mut *self.slot.borrow_mut(), Slot::Done);
        match previous {
            Slot::Ready(result) => {
                self.scheduler
                    .schedule_microtask(Box::new(move || settle(result)));
            }
            Slot::Empty => *self.slot.borrow_mut() = Slot::Waiting(settle),
            // `then` consumes the promise, so a second subscriber cannot exist.
            Slot::Waiting(_) | Slot::Done => {
                tracing::warn!("promise subscribed more than once");
            }
        }
    }
}

impl<T: 'static> Resolver<T> {
    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    pub fn reject(self, err: ActError) {
        self.settle(Err(err));
    }

    pub fn settle(self, result: Result<T, ActError>) {
        let previous = std::mem::replace(&mut *self.slot.borrow_mut(), Slot::Done);
        match previous {
            Slot::Waiting(settle) => {
                self.scheduler
                    .schedule_microtask(Box::new(move || settle(result)));
            }
            Slot::Empty => *self.slot.borrow_mut() = Slot::Ready(result),
            Slot::Ready(_) | Slot::Done => {
                tracing::warn!("promise settled more than once");
            }
        }
    }
}
