use nexa_scheduler::{LocalScheduler, Scheduler};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_execution_order() {
    let scheduler = LocalScheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    // Schedule tasks in mixed order
    {
        let log = log.clone();
        scheduler.schedule_macrotask(Box::new(move || {
            log.borrow_mut().push("macrotask");
        }));
    }

    {
        let log = log.clone();
        scheduler.schedule_microtask(Box::new(move || {
            log.borrow_mut().push("microtask");
        }));
    }

    scheduler.tick();

    // Microtasks always run before the next macrotask
    assert_eq!(*log.borrow(), vec!["microtask", "macrotask"]);
}

#[test]
fn test_microtask_chaining() {
    // Microtasks scheduled by microtasks run in the same drain, before any macrotask.
    // `Box<dyn FnOnce()>` is 'static, so the scheduler is shared through an Rc.
    let log = Rc::new(RefCell::new(Vec::new()));
    let scheduler = Rc::new(LocalScheduler::new());

    {
        let log = log.clone();
        scheduler.schedule_macrotask(Box::new(move || {
            log.borrow_mut().push("macrotask");
        }));
    }

    {
        let log = log.clone();
        let sch = scheduler.clone();
        scheduler.schedule_microtask(Box::new(move || {
            log.borrow_mut().push("task1");

            let log = log.clone();
            sch.schedule_microtask(Box::new(move || {
                log.borrow_mut().push("task2");
            }));
        }));
    }

    scheduler.tick();

    assert_eq!(*log.borrow(), vec!["task1", "task2", "macrotask"]);
}

#[test]
fn test_microtasks_from_macrotask_run_before_next_macrotask() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let scheduler = Rc::new(LocalScheduler::new());

    {
        let log = log.clone();
        let sch = scheduler.clone();
        scheduler.schedule_macrotask(Box::new(move || {
            log.borrow_mut().push("first");
            let log = log.clone();
            sch.schedule_microtask(Box::new(move || {
                log.borrow_mut().push("first:micro");
            }));
        }));
    }
    {
        let log = log.clone();
        scheduler.schedule_macrotask(Box::new(move || {
            log.borrow_mut().push("second");
        }));
    }

    assert_eq!(scheduler.run_until_idle(), 2);
    assert_eq!(*log.borrow(), vec!["first", "first:micro", "second"]);
}
