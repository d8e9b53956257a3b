pub mod tracing_logger;
