use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::core::Seq;

// A sequence serializes as a plain list of its elements.
impl<T: Serialize> Serialize for Seq<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Seq<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Seq::from)
    }
}
