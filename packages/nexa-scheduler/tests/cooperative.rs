use nexa_scheduler::{LocalScheduler, Scheduler, SchedulerError};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

#[test]
fn test_scheduler_yielding() {
    let scheduler = LocalScheduler::new();

    // Initially idle
    assert!(scheduler.is_idle());
    assert!(!scheduler.tick());

    scheduler.schedule_macrotask(Box::new(|| {}));
    scheduler.schedule_macrotask(Box::new(|| {}));
    assert!(!scheduler.is_idle());

    // One macrotask per tick.
    assert!(scheduler.tick());
    assert!(!scheduler.tick());
    assert!(scheduler.is_idle());
}

#[test]
fn test_cooperative_multitasking() {
    // Two "processes" ping-ponging through macrotasks
    let scheduler = Rc::new(LocalScheduler::new());
    let counter = Rc::new(Cell::new(0));

    fn ping(scheduler: Rc<LocalScheduler>, counter: Rc<Cell<u32>>) {
        counter.set(counter.get() + 1);
        if counter.get() < 4 {
            let s = scheduler.clone();
            scheduler.schedule_macrotask(Box::new(move || ping(s, counter)));
        }
    }

    {
        let s = scheduler.clone();
        let c = counter.clone();
        scheduler.schedule_macrotask(Box::new(move || ping(s, c)));
    }

    assert_eq!(scheduler.run_until_idle(), 4);
    assert_eq!(counter.get(), 4);
}

/// A future that completes once something calls `set`.
struct Flag {
    ready: Rc<Cell<bool>>,
    waker: Rc<RefCell<Option<Waker>>>,
}

impl Future for Flag {
    type Output = &'static str;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.ready.get() {
            Poll::Ready("done")
        } else {
            *self.waker.borrow_mut() = Some(cx.waker().clone());
            Poll::Pending
        }
    }
}

#[test]
fn test_block_on_wakes_from_macrotask() {
    let scheduler = LocalScheduler::new();
    let ready = Rc::new(Cell::new(false));
    let waker: Rc<RefCell<Option<Waker>>> = Rc::new(RefCell::new(None));

    {
        let ready = ready.clone();
        let waker = waker.clone();
        scheduler.schedule_macrotask(Box::new(move || {
            ready.set(true);
            if let Some(w) = waker.borrow_mut().take() {
                w.wake();
            }
        }));
    }

    let out = scheduler.block_on(Flag { ready, waker });
    assert_eq!(out, Ok("done"));
}

#[test]
fn test_block_on_reports_stall() {
    let scheduler = LocalScheduler::new();
    let flag = Flag {
        ready: Rc::new(Cell::new(false)),
        waker: Rc::new(RefCell::new(None)),
    };

    assert_eq!(scheduler.block_on(flag), Err(SchedulerError::Stalled));
}

#[test]
fn test_block_on_ready_future_runs_nothing() {
    let scheduler = LocalScheduler::new();
    let ran = Rc::new(Cell::new(false));
    {
        let ran = ran.clone();
        scheduler.schedule_macrotask(Box::new(move || ran.set(true)));
    }

    assert_eq!(scheduler.block_on(async { 7 }), Ok(7));
    assert!(!ran.get());
    assert_eq!(scheduler.pending_macrotasks(), 1);
}
