use std::sync::atomic::{AtomicU64, Ordering};

// f64 stored as its bit pattern so it can live in an AtomicU64
pub struct AtomicF64 {
    inner: AtomicU64,
}

impl AtomicF64 {
    pub fn new(val: f64) -> Self {
        AtomicF64 {
            inner: AtomicU64::new(val.to_bits()),
        }
    }

    pub fn load(&self, ordering: Ordering) -> f64 {
        f64::from_bits(self.inner.load(ordering))
    }

    pub fn store(&self, val: f64, ordering: Ordering) {
        self.inner.store(val.to_bits(), ordering);
    }

    pub fn compare_exchange_weak(
        &self,
        current: f64,
        new: f64,
        success: Ordering,
        failure: Ordering,
    ) -> Result<f64, f64> {
        match self
            .inner
            .compare_exchange_weak(current.to_bits(), new.to_bits(), success, failure)
        {
            Ok(v) => Ok(f64::from_bits(v)),
            Err(v) => Err(f64::from_bits(v)),
        }
    }

    /// Lowers the stored value to `val` if `val` is smaller. Returns the
    /// previous value.
    pub fn fetch_min(&self, val: f64, ordering: Ordering) -> f64 {
        let mut current = self.load(Ordering::Relaxed);
        while val < current {
            match self.compare_exchange_weak(current, val, ordering, Ordering::Relaxed) {
                Ok(previous) => return previous,
                Err(actual) => current = actual,
            }
        }
        current
    }

    pub fn into_inner(self) -> f64 {
        f64::from_bits(self.inner.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn load_store() {
        let a = AtomicF64::new(1.5);
        assert_eq!(a.load(Ordering::Relaxed), 1.5);
        a.store(-2.0, Ordering::Relaxed);
        assert_eq!(a.into_inner(), -2.0);
    }

    #[test]
    fn fetch_min_only_lowers() {
        let a = AtomicF64::new(f64::INFINITY);
        assert_eq!(a.fetch_min(3.0, Ordering::Relaxed), f64::INFINITY);
        assert_eq!(a.fetch_min(5.0, Ordering::Relaxed), 3.0);
        assert_eq!(a.load(Ordering::Relaxed), 3.0);
        assert_eq!(a.fetch_min(-1.0, Ordering::Relaxed), 3.0);
        assert_eq!(a.load(Ordering::Relaxed), -1.0);
    }

    #[test]
    fn concurrent_fetch_min_keeps_smallest() {
        let a = Arc::new(AtomicF64::new(f64::INFINITY));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let a = Arc::clone(&a);
                thread::spawn(move || {
                    for i in 0..1000 {
                        a.fetch_min((t * 1000 + i) as f64 - 500.0, Ordering::Relaxed);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(a.load(Ordering::Relaxed), -500.0);
    }
}
