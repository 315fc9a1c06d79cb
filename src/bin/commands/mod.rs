pub mod bench_cmd;
pub mod check_cmd;
pub mod scan_cmd;

pub use bench_cmd::cmd_bench;
pub use check_cmd::cmd_check;
pub use scan_cmd::cmd_scan;
