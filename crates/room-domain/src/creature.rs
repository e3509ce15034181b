//! Creatures placed in a room.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use chrono::DateTime;
use chrono::FixedOffset;
use chrono::Local;
use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_NAME: &str = "Unnamed";
pub const DEFAULT_SIZE: i32 = 1;

const CREATED_FORMAT: &str = "%I:%M %p, %d.%m.%Y";

/// A named rectangle with a creation time.
///
/// Equality and hashing look at the name, position and size only; two
/// creatures created at different moments but otherwise identical are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    name: String,
    created: DateTime<FixedOffset>,
}

impl Creature {
    /// An unnamed 1x1 creature at `(x, y)`, created now.
    pub fn new(x: i32, y: i32) -> Self {
        Self::sized_named(x, y, DEFAULT_SIZE, DEFAULT_SIZE, DEFAULT_NAME)
    }

    pub fn named(x: i32, y: i32, name: impl Into<String>) -> Self {
        Self::sized_named(x, y, DEFAULT_SIZE, DEFAULT_SIZE, name)
    }

    pub fn sized(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::sized_named(x, y, width, height, DEFAULT_NAME)
    }

    pub fn sized_named(x: i32, y: i32, width: i32, height: i32, name: impl Into<String>) -> Self {
        Self::with_created(x, y, width, height, name, Local::now().fixed_offset())
    }

    pub fn with_created(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        name: impl Into<String>,
        created: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            name: name.into(),
            created,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn created(&self) -> DateTime<FixedOffset> {
        self.created
    }

    pub fn set_created(&mut self, created: DateTime<FixedOffset>) {
        self.created = created;
    }

    /// How far the creature sits from the origin corner, `x + y`.
    pub fn coolness(&self) -> i64 {
        i64::from(self.x) + i64::from(self.y)
    }

    /// Orders creatures by [`coolness`](Self::coolness) alone.
    ///
    /// Creatures with equal coolness compare as `Equal` even when they differ
    /// otherwise, so their relative order after sorting is unspecified. This
    /// is why `Creature` does not implement `Ord`.
    pub fn cmp_coolness(&self, other: &Self) -> Ordering {
        self.coolness().cmp(&other.coolness())
    }
}

impl PartialEq for Creature {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
    }
}

impl Eq for Creature {}

impl Hash for Creature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.x.hash(state);
        self.y.hash(state);
        self.width.hash(state);
        self.height.hash(state);
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Creature at ({}; {}), \tsize: {} x {}, created {}, name: {}",
            self.x,
            self.y,
            self.width,
            self.height,
            self.created.format(CREATED_FORMAT),
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn test_constructor_defaults() {
        let c = Creature::new(3, 4);
        assert_eq!(c.name(), DEFAULT_NAME);
        assert_eq!((c.width(), c.height()), (DEFAULT_SIZE, DEFAULT_SIZE));

        let c = Creature::named(1, 2, "Barsik");
        assert_eq!(c.name(), "Barsik");

        let c = Creature::sized(1, 2, 10, 20);
        assert_eq!((c.x(), c.y(), c.width(), c.height()), (1, 2, 10, 20));
        assert_eq!(c.name(), DEFAULT_NAME);
    }

    #[test]
    fn test_equality_ignores_created() {
        let a = Creature::with_created(1, 2, 3, 4, "cat", at("2018-03-01T10:00:00+03:00"));
        let b = Creature::with_created(1, 2, 3, 4, "cat", at("2020-01-01T00:00:00Z"));
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_equality_checks_every_shape_field() {
        let base = Creature::sized_named(1, 2, 3, 4, "cat");
        assert_ne!(base, Creature::sized_named(9, 2, 3, 4, "cat"));
        assert_ne!(base, Creature::sized_named(1, 9, 3, 4, "cat"));
        assert_ne!(base, Creature::sized_named(1, 2, 9, 4, "cat"));
        assert_ne!(base, Creature::sized_named(1, 2, 3, 9, "cat"));
        assert_ne!(base, Creature::sized_named(1, 2, 3, 4, "dog"));
    }

    #[test]
    fn test_setters() {
        let mut c = Creature::new(0, 0);
        c.set_name("Murka");
        let when = at("2019-12-31T23:59:00+00:00");
        c.set_created(when);
        assert_eq!(c.name(), "Murka");
        assert_eq!(c.created(), when);
    }

    #[test]
    fn test_coolness_ordering() {
        let mut creatures = vec![
            Creature::named(10, 10, "far"),
            Creature::named(-5, 0, "behind"),
            Creature::named(1, 2, "near"),
        ];
        creatures.sort_by(Creature::cmp_coolness);
        let names: Vec<&str> = creatures.iter().map(Creature::name).collect();
        assert_eq!(names, ["behind", "near", "far"]);
    }

    #[test]
    fn test_coolness_tie_is_equal_ordering_but_not_equal() {
        let a = Creature::named(1, 2, "a");
        let b = Creature::named(2, 1, "b");
        assert_eq!(a.cmp_coolness(&b), Ordering::Equal);
        assert_ne!(a, b);
    }

    #[test]
    fn test_coolness_does_not_overflow() {
        let c = Creature::new(i32::MAX, i32::MAX);
        assert_eq!(c.coolness(), 2 * i64::from(i32::MAX));
    }

    #[test]
    fn test_display() {
        let c = Creature::with_created(3, -4, 2, 5, "Tom", at("2018-03-05T14:07:00+03:00"));
        assert_eq!(
            c.to_string(),
            "Creature at (3; -4), \tsize: 2 x 5, created 02:07 PM, 05.03.2018, name: Tom"
        );
    }

    #[test]
    fn test_serde_keeps_created_offset() {
        let c = Creature::with_created(1, 2, 3, 4, "cat", at("2018-03-05T14:07:00+03:00"));
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["name"], "cat");
        assert_eq!(json["created"], "2018-03-05T14:07:00+03:00");

        let back: Creature = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
        assert_eq!(back.created(), c.created());
    }

    proptest! {
        #[test]
        fn sorting_by_coolness_is_monotonic(points in prop::collection::vec((any::<i32>(), any::<i32>()), 0..32)) {
            let mut creatures: Vec<Creature> =
                points.iter().map(|&(x, y)| Creature::new(x, y)).collect();
            creatures.sort_by(Creature::cmp_coolness);
            for pair in creatures.windows(2) {
                prop_assert!(pair[0].coolness() <= pair[1].coolness());
            }
        }

        #[test]
        fn equal_creatures_hash_alike(x in any::<i32>(), y in any::<i32>(), name in "[a-z]{0,8}") {
            let a = Creature::named(x, y, name.clone());
            let b = Creature::named(x, y, name);
            let mut set = HashSet::new();
            set.insert(a);
            prop_assert!(!set.insert(b));
        }
    }
}
