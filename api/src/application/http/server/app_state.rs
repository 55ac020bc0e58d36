use std::sync::Arc;

use rotireps_core::application::RotiRepsService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RotiRepsService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RotiRepsService) -> Self {
        Self { args, service }
    }
}
