use crate::core::Job;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a job through its three stages, reporting progress between them.
pub struct JobEngine<J: Job> {
    job: J,
    monitor: SystemMonitor,
}

impl<J: Job> JobEngine<J> {
    pub fn new(job: J) -> Self {
        Self {
            job,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(job: J, monitor_enabled: bool) -> Self {
        Self {
            job,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting {} job...", self.job.name());

        let items = self.job.plan().await?;
        println!("Planned {} items", items.len());
        self.monitor.log_stage("Plan");

        let output = self.job.build(items).await?;
        self.monitor.log_stage("Build");

        let location = self.job.publish(output).await?;
        println!("Output saved to: {}", location);
        self.monitor.log_stage("Publish");
        self.monitor.log_summary();

        Ok(location)
    }
}
