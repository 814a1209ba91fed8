/// Called once per tick, after the frame is presented.
pub trait FramePacer {
    fn wait_for_next_tick(&mut self);
}
