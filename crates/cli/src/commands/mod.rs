mod plan;

pub use plan::PlanCommand;
