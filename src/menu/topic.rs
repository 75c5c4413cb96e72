use crate::topics::{self, Page};

/// The reserved choice which ends the tour.
pub const EXIT: i64 = 0;

#[derive(Clone, Copy)]
pub struct Topic {
    pub id: i64,
    pub name: &'static str,
    pub run: fn(&mut Page),
}

impl std::fmt::Debug for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Topic {{ {}: {} }}", self.id, self.name)
    }
}

macro_rules! topic {
    ($id:expr, $name:expr, $module:ident) => {
        Topic {
            id: $id,
            name: $name,
            run: topics::$module::run,
        }
    };
}

/// Menu order is display order only.
pub const TOPICS: &[Topic] = &[
    topic!(1, "Variables", variables),
    topic!(2, "Constants", constants),
    topic!(3, "Data Types", data_types),
    topic!(4, "Arrays", arrays),
    topic!(5, "Slices", slices),
    topic!(6, "Operators", operators),
    topic!(7, "Conditions", conditions),
    topic!(8, "Loops", loops),
    topic!(9, "Functions", functions),
    topic!(10, "Structs", structs),
    topic!(11, "Maps", maps),
    topic!(12, "Defer", defer),
];

pub fn find(topics: &[Topic], id: i64) -> Option<&Topic> {
    if id == EXIT {
        return None;
    }
    topics.iter().find(|topic| topic.id == id)
}

pub fn max_id(topics: &[Topic]) -> i64 {
    topics.iter().map(|topic| topic.id).max().unwrap_or(EXIT)
}

/// Every id is unique and none of them is `EXIT`.
pub(crate) fn is_well_formed(topics: &[Topic]) -> bool {
    topics.iter().enumerate().all(|(index, topic)| {
        topic.id != EXIT && topics[..index].iter().all(|other| other.id != topic.id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_dense_and_unique() {
        assert!(is_well_formed(TOPICS));
        for id in 1..=12 {
            assert_eq!(find(TOPICS, id).map(|t| t.id), Some(id));
        }
        assert_eq!(max_id(TOPICS), 12);
    }

    #[test]
    fn test_exit_is_never_a_topic() {
        assert!(find(TOPICS, EXIT).is_none());
        assert!(find(TOPICS, 13).is_none());
        assert!(find(TOPICS, -1).is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let topics = [TOPICS[0], TOPICS[0]];
        assert!(!is_well_formed(&topics));
        assert_eq!(max_id(&[]), EXIT);
    }
}
