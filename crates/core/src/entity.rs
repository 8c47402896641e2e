//! Entities: records with a stable id, kept in insertion-ordered collections.

/// An identified record.
pub trait Entity {
    /// Integer id newtype, cheap to copy.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> Self::Id;
}

/// The entity of `items` with the given id.
pub fn find_by_id<E: Entity>(items: &[E], id: E::Id) -> Option<&E> {
    items.iter().find(|item| item.id() == id)
}

pub fn find_by_id_mut<E: Entity>(items: &mut [E], id: E::Id) -> Option<&mut E> {
    items.iter_mut().find(|item| item.id() == id)
}

/// Largest id value in `items`, or 0 when empty.
pub fn max_id<E, F>(items: &[E], value: F) -> u64
where
    E: Entity,
    F: Fn(E::Id) -> u64,
{
    items.iter().map(|item| value(item.id())).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row(u64);

    impl Entity for Row {
        type Id = u64;

        fn id(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn lookups_by_id() {
        let mut rows = vec![Row(3), Row(9), Row(4)];
        assert_eq!(find_by_id(&rows, 9).map(|r| r.0), Some(9));
        assert!(find_by_id(&rows, 1).is_none());

        find_by_id_mut(&mut rows, 4).unwrap().0 = 40;
        assert_eq!(max_id(&rows, |id| id), 40);
        assert_eq!(max_id::<Row, _>(&[], |id| id), 0);
    }
}
