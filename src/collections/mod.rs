//! Typed container facades over the engines in [`ds`](crate::ds).
//!
//! | Container   | Engine            | Order                 |
//! |-------------|-------------------|-----------------------|
//! | [`Deque`]   | `RingBuffer`      | both ends             |
//! | [`Queue`]   | `RingBuffer`      | FIFO                  |
//! | [`Stack`]   | `LinearBuffer`    | LIFO                  |
//! | [`Heap`]    | `ComparatorHeap`  | by comparator         |
//! | [`Set`]     | `FxHashSet`       | unordered membership  |

pub mod deque;
pub mod heap;
pub mod queue;
pub mod set;
pub mod stack;

pub use deque::Deque;
pub use heap::Heap;
pub use queue::Queue;
pub use set::Set;
pub use stack::Stack;
