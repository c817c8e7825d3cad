//! probemap: a single-threaded, string-keyed hash table using open
//! addressing with double hashing.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep every collision-resolution decision local to one owned
//!   slot array so the table can be reasoned about without aliasing.
//! - Layers:
//!   - prime: trial-division `is_prime` / `next_prime` backing the
//!     capacity schedule `next_prime(50 << size_index)`.
//!   - hash: polynomial rolling base hash with two prime multipliers (151
//!     and 163) combined into the double-hashing probe sequence
//!     `start = hash_a`, stride `hash_b + 1`.
//!   - probe_map: `ProbeMap`, the slot array plus the load-driven
//!     grow/shrink policy. Public surface of the crate.
//!
//! Constraints
//! - Single-threaded: mutation takes `&mut self`, lookup `&self`; the
//!   borrow checker supplies the single-writer discipline, so there are no
//!   locks and no atomics.
//! - The table owns its strings. Insert moves key and value in and
//!   removal moves the value back out. Whatever remains is dropped with
//!   the table.
//! - Capacity is always prime, so any nonzero stride visits every slot
//!   before repeating; every probe loop is bounded by one full cycle.
//! - Load stays inside a 10%-70% window, enforced by pre-checks in
//!   insert (grow) and remove (shrink). A rehash re-seats entries through
//!   a placement path with no pre-check, so resizing never recurses. The
//!   table never shrinks below its initial 53 slots.
//!
//! Deletion and tombstones
//! - Removal leaves a `Tombstone` rather than `Empty`, keeping probe
//!   chains for other keys intact; lookups skip tombstones and stop at
//!   the first `Empty` slot.
//! - Insert remembers the first tombstone on its probe path but keeps
//!   probing until a match or an `Empty` slot decides between update and
//!   fresh placement. Reusing the tombstone any earlier could shadow a
//!   live entry for the same key further along the chain.
//! - Rehashing carries live entries only; tombstones die with the old
//!   array, which is what lets a shrunken table probe efficiently again.
//!
//! Failure model
//! - The API is total: absent keys yield `None`, duplicate inserts are
//!   updates. Allocation failure aborts through the global allocator
//!   path. A probe cycle that finds neither the key nor a usable slot
//!   means the load invariant was broken and panics.

mod hash;
mod prime;
mod probe_map;

// Public surface
pub use probe_map::ProbeMap;
