use std::sync::Arc;

pub type LoggerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub trait Logger: Send + Sync {
    fn info(&self, message: &str) -> LoggerResult;
    fn error(&self, message: &str) -> LoggerResult;
    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync>;
}

pub fn join_namespace(current: &Option<String>, namespace: &str) -> String {
    match current {
        Some(current) => format!("{}:{}", current, namespace),
        None => namespace.to_string(),
    }
}
