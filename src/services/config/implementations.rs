// 設定管理の具象実装

use crate::core::PipelineConfig;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPipelineConfig {
    worker_count: usize,
    task_count: usize,
    buffer_size: usize,
    enable_events: bool,
}

impl DefaultPipelineConfig {
    pub fn new(worker_count: usize, task_count: usize) -> Self {
        Self {
            worker_count,
            task_count,
            buffer_size: 100,
            enable_events: true,
        }
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_task_count(mut self, task_count: usize) -> Self {
        self.task_count = task_count;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_event_logging(mut self, enable: bool) -> Self {
        self.enable_events = enable;
        self
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            worker_count: num_cpus::get().max(1),
            task_count: 0,
            buffer_size: 100,
            enable_events: true,
        }
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn task_count(&self) -> usize {
        self.task_count
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn enable_event_logging(&self) -> bool {
        self.enable_events
    }
}
