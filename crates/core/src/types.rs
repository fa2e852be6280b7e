/// Equipment identifiers are 64-bit integers, unique per collection
/// (a bicycle and a lock may share the same numeric id).
pub type DbId = i64;
