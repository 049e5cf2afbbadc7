pub mod geo;

pub use geo::*;

use std::collections::HashMap;

pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// Members sharing one name, as indexes into the grouped slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub members: Vec<usize>,
}

impl Group {
    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }
}

/// Partitions `items` by name. Groups come out in first-seen order and members
/// keep their relative order, so repeated runs produce identical output.
pub fn group_by_name<T>(items: &[T]) -> Vec<Group>
where
    T: Identifiable,
{
    let mut lookup: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();
    items.iter().enumerate().for_each(|(i, item)| {
        let group_idx = *lookup.entry(item.name()).or_insert_with(|| {
            groups.push(Group {
                name: item.name().to_string(),
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[group_idx].members.push(i);
    });
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str, &'static str);

    impl Identifiable for Named {
        fn id(&self) -> &str {
            self.0
        }

        fn name(&self) -> &str {
            self.1
        }
    }

    #[test]
    fn group_by_name_keeps_first_seen_order() {
        let items = [
            Named("n1", "Main St"),
            Named("n2", "Market"),
            Named("n3", "Main St"),
            Named("n4", "Depot"),
            Named("n5", "Market"),
        ];
        let groups = group_by_name(&items);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Main St", "Market", "Depot"]);
        assert_eq!(groups[0].members, [0, 2]);
        assert_eq!(groups[1].members, [1, 4]);
        assert!(groups[2].is_singleton());
    }

    #[test]
    fn group_by_name_is_a_partition() {
        let items = [Named("a", "x"), Named("b", "y"), Named("c", "x")];
        let mut seen: Vec<_> = group_by_name(&items)
            .into_iter()
            .flat_map(|g| g.members)
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, [0, 1, 2]);
    }
}
