pub mod comparator_heap;
pub mod linear_buffer;
pub mod ring_buffer;

pub use comparator_heap::{Comparator, ComparatorHeap, MaxFirst, MinFirst};
pub use linear_buffer::LinearBuffer;
pub use ring_buffer::RingBuffer;
