pub mod practice_log;
