/// Three-state result of a fetch, owned exclusively by the screen that
/// issued it. There is no shared cache: a remount starts over at Loading.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_accessor() {
        let remote: Remote<Vec<u8>> = Remote::Ready(vec![1]);
        assert_eq!(remote.ready().map(|v| v.len()), Some(1));
        assert!(!remote.is_loading());

        let failed: Remote<Vec<u8>> = Remote::Failed("boom".into());
        assert!(failed.ready().is_none());
    }
}
