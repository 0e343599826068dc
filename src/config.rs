pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const DEFAULT_FLEET: [usize; 5] = [5, 4, 3, 3, 2];

// Sampler budget: min(MAX_SAMPLED_CONFIGS, BASE_SAMPLE_BUDGET + cells * SAMPLE_BUDGET_PER_CELL)
pub const MAX_SAMPLED_CONFIGS: usize = 8000;
pub const BASE_SAMPLE_BUDGET: usize = 1200;
pub const SAMPLE_BUDGET_PER_CELL: usize = 4;

// Normalizer smoothing per estimator.
pub const SAMPLER_ALPHA: u64 = 1;
pub const SCORER_ALPHA: u64 = 0;
