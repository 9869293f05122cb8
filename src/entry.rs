use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}

impl<T, U> Entry<T, U> {
    pub fn into_pair(self) -> (T, U) {
        let Entry { key, value } = self;
        (key, value)
    }
}

impl<T, U> Ord for Entry<T, U>
where
    T: Ord,
{
    fn cmp(&self, other: &Entry<T, U>) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<T, U> PartialOrd for Entry<T, U>
where
    T: Ord,
{
    fn partial_cmp(&self, other: &Entry<T, U>) -> Option<Ordering> {
        Some(self.key.cmp(&other.key))
    }
}

impl<T, U> PartialEq for Entry<T, U>
where
    T: Ord,
{
    fn eq(&self, other: &Entry<T, U>) -> bool {
        self.key == other.key
    }
}

impl<T, U> Eq for Entry<T, U> where T: Ord {}

#[cfg(test)]
mod tests {
    use super::Entry;

    #[test]
    fn test_entry_ordered_by_key() {
        let lower = Entry { key: 1, value: 9 };
        let upper = Entry { key: 2, value: 0 };
        assert!(lower < upper);
        assert_eq!(Entry { key: 1, value: 3 }, lower);
    }

    #[test]
    fn test_into_pair() {
        assert_eq!(Entry { key: 1, value: "a" }.into_pair(), (1, "a"));
    }
}
