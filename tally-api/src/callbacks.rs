//! Higher-order helpers and a transactional task runner

use std::cmp::Ordering;

/// Elements of `items` for which `condition` holds, in input order
pub fn filter<T, P>(items: &[T], condition: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| condition(item)).cloned().collect()
}

/// Sort `items` with `comparator` and hand them back. The sort is stable.
pub fn sort_with<T, C>(mut items: Vec<T>, comparator: C) -> Vec<T>
where
    C: FnMut(&T, &T) -> Ordering,
{
    items.sort_by(comparator);
    items
}

/// Produce a value from a supplier
pub fn create<T, S>(supplier: S) -> T
where
    S: FnOnce() -> T,
{
    supplier()
}

/// Apply `function` to `value`
pub fn apply<T, U, F>(value: T, function: F) -> U
where
    F: FnOnce(T) -> U,
{
    function(value)
}

/// Combine two values with a binary operator
pub fn combine<T, F>(left: T, right: T, operator: F) -> T
where
    F: FnOnce(T, T) -> T,
{
    operator(left, right)
}

/// A unit of work that can be run inside a transaction
pub trait Task {
    /// Do the work
    fn run(&mut self);
}

impl<F> Task for F
where
    F: FnMut(),
{
    fn run(&mut self) {
        self()
    }
}

/// A task that only records whether it ran
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingTask {
    consumed: bool,
}

impl RecordingTask {
    /// Create a task that has not run yet
    pub fn new() -> Self {
        Self::default()
    }

    /// True once [`Task::run`] has been called
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

impl Task for RecordingTask {
    fn run(&mut self) {
        self.consumed = true;
    }
}

/// Lifecycle of a [`Transaction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    /// Created but not started
    Pending,
    /// Started and not yet stopped
    Active,
    /// Stopped
    Finished,
}

/// A bracket around a task: started before it runs, stopped after
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    state: TransactionState,
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Transaction {
    /// Create a pending transaction
    pub fn new() -> Self {
        Self {
            state: TransactionState::Pending,
        }
    }

    /// Enter the active state
    pub fn start(&mut self) {
        log::debug!("transaction started");
        self.state = TransactionState::Active;
    }

    /// Enter the finished state
    pub fn stop(&mut self) {
        log::debug!("transaction stopped");
        self.state = TransactionState::Finished;
    }

    /// Current state
    pub fn state(&self) -> TransactionState {
        self.state
    }
}

/// Run `task` between a transaction start and stop, returning the finished
/// transaction
pub fn within_transaction<T>(task: &mut T) -> Transaction
where
    T: Task + ?Sized,
{
    let mut transaction = Transaction::new();
    transaction.start();
    task.run();
    transaction.stop();
    transaction
}
