//! Stand-in for the handful of MPI calls made by the event generator,
//! for builds without an MPI implementation. Every call behaves as if
//! the communicator were MPI_COMM_SELF: one task, rank zero, and
//! reductions that copy the send buffer into the receive buffer.

/// Anything that can be the send or receive buffer of a reduction
pub trait AsSlice {
    fn copy_from(&mut self, src: &Self);
}

impl<T: Copy> AsSlice for T {
    fn copy_from(&mut self, src: &Self) {
        *self = *src;
    }
}

impl<T: Copy> AsSlice for [T] {
    fn copy_from(&mut self, src: &Self) {
        self.copy_from_slice(src)
    }
}

pub trait Operation {}

/// Reduction operations, named as in `mpi::collective`
#[allow(non_camel_case_types)]
pub enum SystemOperation {
    min(),
    max(),
    sum(),
}

impl Operation for SystemOperation {}

pub trait Communicator {
    /// With a single task every reduction is the identity
    fn all_reduce_into<S: AsSlice + ?Sized, O: Operation>(&self, send: &S, recv: &mut S, _op: O) {
        recv.copy_from(send);
    }

    fn rank(&self) -> i32 {
        0
    }

    fn size(&self) -> i32 {
        1
    }
}

pub struct SingleTask {}

impl Communicator for SingleTask {}

pub struct Universe {}

impl Universe {
    pub fn world(&self) -> SingleTask {
        SingleTask {}
    }
}

pub fn initialize() -> Option<Universe> {
    Some(Universe {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reductions_are_copies() {
        let world = initialize().unwrap().world();
        assert_eq!(world.rank(), 0);
        assert_eq!(world.size(), 1);

        let accepted: u64 = 17;
        let mut total: u64 = 0;
        world.all_reduce_into(&accepted, &mut total, SystemOperation::sum());
        assert_eq!(accepted, total);

        let tallies = [4.0, 0.5, 1.0e-38];
        let mut summed = [0.0; 3];
        world.all_reduce_into(&tallies[..], &mut summed[..], SystemOperation::sum());
        println!("tallies = {:?}, summed = {:?}", tallies, summed);
        assert_eq!(tallies, summed);
    }
}
