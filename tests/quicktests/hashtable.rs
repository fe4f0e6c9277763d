use keyed_search::hashtable::HashTable;

use std::collections::HashMap;

use crate::Op;

quickcheck::quickcheck! {
    fn matches_map(ops: Vec<Op<String, i16>>, capacity: u8) -> bool {
        let Ok(mut table) = HashTable::new(usize::from(capacity) + 1) else {
            return false;
        };
        let mut map = HashMap::new();

        for op in &ops {
            match op {
                Op::Insert(k, v) => {
                    table.insert(k, f32::from(*v));
                    map.insert(k.as_str(), f32::from(*v));
                }
                Op::Remove(k) => {
                    table.delete(k);
                    map.remove(k.as_str());
                }
            }
        }

        table.len() == map.len()
            && table.iter().count() == map.len()
            && map.iter().all(|(key, value)| table.get(key) == Some(value))
    }
}

quickcheck::quickcheck! {
    fn entries_sit_in_their_bucket(keys: Vec<String>) -> bool {
        let Ok(mut table) = HashTable::new(7) else {
            return false;
        };
        for key in &keys {
            table.insert(key, 0.0);
        }

        keys.iter()
            .all(|key| table.chain(key).all(|entry| table.hash(entry.key()) == table.hash(key)))
    }
}
