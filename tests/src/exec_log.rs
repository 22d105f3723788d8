use crate::logging_driver::DriverOp;
use rowmap_core::{
    driver::{operation::Transaction, Operation, Response},
    Result,
};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
#[derive(Debug, Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Check if any operation matches the given predicate
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .any(|op| predicate(&op.operation))
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    pub fn count_transaction(&self, transaction: Transaction) -> usize {
        self.count(|op| *op == Operation::Transaction(transaction))
    }

    /// Check if there's a Query operation
    pub fn has_query(&self) -> bool {
        self.any(Operation::is_query)
    }

    /// Check if there's an Execute operation
    pub fn has_execute(&self) -> bool {
        self.any(Operation::is_execute)
    }

    /// Every logged operation as text: the SQL of statements, and the SQL
    /// keyword of transaction ops.
    pub fn statements(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| match &op.operation {
                Operation::Transaction(transaction) => transaction.as_sql().to_string(),
                operation => operation.sql().unwrap_or_default().to_string(),
            })
            .collect()
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    /// Returns None if the log is empty
    pub fn pop(&self) -> Option<(Operation, Result<Response>)> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            let driver_op = ops.remove(0);
            Some((driver_op.operation, driver_op.response))
        }
    }

    /// Get access to all operations for custom assertions
    /// This is an escape hatch for complex assertions
    pub fn with_ops<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[DriverOp]) -> R,
    {
        let ops = self.ops.lock().unwrap();
        f(&ops)
    }
}
