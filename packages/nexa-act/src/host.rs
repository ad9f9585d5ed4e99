use crate::environment::ActEnvironment;
use crate::task::{RendererTask, Step};

impl ActEnvironment {
    /// Entry point for renderers scheduling work.
    ///
    /// Inside an act scope the task joins the active queue. Otherwise it runs on
    /// a host macrotask, and any continuation it returns is scheduled again the
    /// same way.
    pub fn schedule_renderer_task(&self, task: RendererTask) {
        match self.state().enqueue(task) {
            Ok(()) => tracing::trace!("renderer task joined act queue"),
            Err(task) => {
                let env = self.clone();
                self.scheduler()
                    .schedule_macrotask(Box::new(move || env.run_host_task(task)));
            }
        }
    }

    fn run_host_task(&self, task: RendererTask) {
        match task.run(false) {
            Ok(Step::Done) => {}
            Ok(Step::Continue { next, .. }) => self.schedule_renderer_task(next),
            Err(err) => {
                tracing::error!(error = %err, "renderer task failed outside act scope");
            }
        }
    }
}
