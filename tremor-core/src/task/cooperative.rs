//! Resumable unit of work
//!
//! Tasks keep their continuation point and locals in their own struct, so a
//! suspended task costs nothing but its size. Inner operations report
//! suspension by returning [`Poll::Pending`]; a task forwards that with
//! [`core::task::ready!`] and re-enters the same operation on the next
//! resume.

use core::task::Poll;

/// A stackless task resumed by an external driver loop
///
/// Only one `resume()` is ever active at a time. Each call runs the task up
/// to its next suspend point and returns `Poll::Pending`, or returns
/// `Poll::Ready` with the task's output once it has finished. Tasks that
/// never finish use [`core::convert::Infallible`] as their output.
pub trait Cooperative {
    /// Value produced when the task runs to completion
    type Output;

    /// Run until the next suspend point
    fn resume(&mut self) -> Poll<Self::Output>;
}

impl<T: Cooperative + ?Sized> Cooperative for &mut T {
    type Output = T::Output;

    fn resume(&mut self) -> Poll<Self::Output> {
        (**self).resume()
    }
}

/// Resume a task at most `max_resumes` times, calling `between` after every
/// suspension
///
/// Returns `Poll::Ready` with the output if the task finished within the
/// budget, `Poll::Pending` otherwise. `between` is where a host-side harness
/// advances simulated time or services other work.
pub fn drive_with<T, F>(task: &mut T, max_resumes: usize, mut between: F) -> Poll<T::Output>
where
    T: Cooperative + ?Sized,
    F: FnMut(),
{
    for _ in 0..max_resumes {
        if let Poll::Ready(output) = task.resume() {
            return Poll::Ready(output);
        }
        between();
    }
    Poll::Pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::task::ready;

    /// Counts to a target, suspending after every increment
    struct Counter {
        count: u32,
        target: u32,
    }

    impl Cooperative for Counter {
        type Output = u32;

        fn resume(&mut self) -> Poll<u32> {
            if self.count == self.target {
                return Poll::Ready(self.count);
            }
            self.count += 1;
            Poll::Pending
        }
    }

    /// Outer task that waits on an inner counter, then adds its own work
    struct Outer {
        inner: Counter,
        entered: u32,
        resumed_after_inner: bool,
    }

    impl Cooperative for Outer {
        type Output = u32;

        fn resume(&mut self) -> Poll<u32> {
            self.entered += 1;
            let inner = ready!(self.inner.resume());
            self.resumed_after_inner = true;
            Poll::Ready(inner * 10)
        }
    }

    #[test]
    fn test_locals_survive_suspension() {
        let mut task = Counter {
            count: 0,
            target: 3,
        };
        assert_eq!(task.resume(), Poll::Pending);
        assert_eq!(task.resume(), Poll::Pending);
        assert_eq!(task.count, 2);
        assert_eq!(task.resume(), Poll::Pending);
        assert_eq!(task.resume(), Poll::Ready(3));
    }

    #[test]
    fn test_suspension_propagates_through_nested_calls() {
        let mut task = Outer {
            inner: Counter {
                count: 0,
                target: 2,
            },
            entered: 0,
            resumed_after_inner: false,
        };

        assert_eq!(task.resume(), Poll::Pending);
        assert!(!task.resumed_after_inner);
        assert_eq!(task.resume(), Poll::Pending);
        assert!(!task.resumed_after_inner);

        // Third resume re-enters the inner task, which now completes
        assert_eq!(task.resume(), Poll::Ready(20));
        assert!(task.resumed_after_inner);
        assert_eq!(task.entered, 3);
    }

    #[test]
    fn test_drive_stops_at_budget() {
        let mut task = Counter {
            count: 0,
            target: 100,
        };
        assert_eq!(drive_with(&mut task, 10, || {}), Poll::Pending);
        assert_eq!(task.count, 10);
    }

    #[test]
    fn test_drive_returns_output() {
        let mut task = Counter {
            count: 0,
            target: 4,
        };
        assert_eq!(drive_with(&mut task, 10, || {}), Poll::Ready(4));
    }

    #[test]
    fn test_drive_with_runs_between_suspensions() {
        let mut task = Counter {
            count: 0,
            target: 3,
        };
        let mut ticks = 0;
        assert_eq!(drive_with(&mut task, 10, || ticks += 1), Poll::Ready(3));
        assert_eq!(ticks, 3);
    }
}
