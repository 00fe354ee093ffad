//! 事务边界的提交后回调
//!
//! 与具体持久化框架解耦：业务事务持有一个 `UnitOfWork`，提交成功时依次
//! 执行注册的回调；回滚（显式或析构）时全部丢弃。

use tracing::debug;

type AfterCommitHook = Box<dyn FnOnce() + Send + 'static>;

/// 业务事务的工作单元
///
/// 回调只在 `commit` 时执行恰好一次；`rollback` 或未提交析构都不会执行。
#[derive(Default)]
pub struct UnitOfWork {
    after_commit: Vec<AfterCommitHook>,
}

impl UnitOfWork {
    pub fn begin() -> Self {
        Self::default()
    }

    /// 注册一个提交后回调
    pub fn register_after_commit<F>(&mut self, hook: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.after_commit.push(Box::new(hook));
    }

    pub fn pending_hooks(&self) -> usize {
        self.after_commit.len()
    }

    /// 事务已持久提交，按注册顺序执行全部回调
    pub fn commit(mut self) {
        for hook in self.after_commit.drain(..) {
            hook();
        }
    }

    /// 事务回滚，丢弃全部回调
    pub fn rollback(self) {
        if !self.after_commit.is_empty() {
            debug!(
                discarded = self.after_commit.len(),
                "transaction rolled back, discarding after-commit hooks"
            );
        }
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// 测试：提交时按注册顺序执行回调
    #[test]
    fn test_commit_runs_hooks_in_order() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut uow = UnitOfWork::begin();
        for i in 0..3 {
            let order = Arc::clone(&order);
            uow.register_after_commit(move || order.lock().unwrap().push(i));
        }

        uow.commit();
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    /// 测试：回滚不执行任何回调
    #[test]
    fn test_rollback_discards_hooks() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut uow = UnitOfWork::begin();
        let counter = Arc::clone(&calls);
        uow.register_after_commit(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        uow.rollback();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    /// 测试：未提交析构等同回滚
    #[test]
    fn test_drop_without_commit_discards_hooks() {
        let calls = Arc::new(AtomicUsize::new(0));
        {
            let mut uow = UnitOfWork::begin();
            let counter = Arc::clone(&calls);
            uow.register_after_commit(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
