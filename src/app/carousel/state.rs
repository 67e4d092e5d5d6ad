/// Pointer travel (in px) required for a release to count as a swipe.
pub const DRAG_THRESHOLD: f64 = 50.0;

/// What a pointer release should do, given how far it travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Next,
    Prev,
    TogglePlayback,
    None,
}

/// Slide bookkeeping for the media carousel, kept separate from the view so
/// the transitions can be exercised without a DOM.
///
/// Slides are indexed 0..len(). When a video is present it occupies slide 0
/// and the images follow; otherwise the images start at 0. An unfinished
/// video slide gates the autoplay timer until playback ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    image_count: usize,
    has_video: bool,
    index: usize,
    direction: i8,
    auto_playing: bool,
    video_ended: bool,
    video_paused: bool,
}

impl CarouselState {
    pub fn new(image_count: usize, has_video: bool) -> Self {
        Self {
            image_count,
            has_video,
            index: 0,
            direction: 1,
            auto_playing: true,
            video_ended: false,
            video_paused: false,
        }
    }

    pub fn len(&self) -> usize {
        self.image_count + usize::from(self.has_video)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// -1 or +1, consumed by the slide transition effect only.
    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn on_video_slide(&self) -> bool {
        self.has_video && self.index == 0
    }

    /// Index into the image list. Only meaningful off the video slide.
    pub fn image_index(&self) -> usize {
        self.index - usize::from(self.has_video)
    }

    pub fn video_paused(&self) -> bool {
        self.video_paused
    }

    /// Whether the periodic timer should advance slides right now. A video
    /// slide that hasn't finished playing suppresses it.
    pub fn autoplay_active(&self) -> bool {
        self.auto_playing && !(self.on_video_slide() && !self.video_ended)
    }

    pub fn next(&mut self) {
        self.direction = 1;
        if self.len() > 0 {
            self.index = (self.index + 1) % self.len();
        }
    }

    pub fn prev(&mut self) {
        self.direction = -1;
        if self.len() > 0 {
            self.index = (self.index + self.len() - 1) % self.len();
        }
    }

    /// One firing of the autoplay timer.
    pub fn tick(&mut self) {
        if self.autoplay_active() {
            self.next();
        }
    }

    pub fn pause_autoplay(&mut self) {
        self.auto_playing = false;
    }

    pub fn resume_autoplay(&mut self) {
        self.auto_playing = true;
    }

    /// The video finished playing: move on to the first image slide and let
    /// the timer take over.
    pub fn video_finished(&mut self) {
        self.video_ended = true;
        self.auto_playing = true;
        self.direction = 1;
        if self.len() > 1 {
            self.index = 1;
        }
    }

    pub fn toggle_video_playback(&mut self) {
        self.video_paused = !self.video_paused;
    }

    /// Classify a pointer release by horizontal travel. Past the threshold it
    /// is a swipe; under it, a tap on the video slide toggles playback and is
    /// a no-op anywhere else.
    pub fn classify_drag(&self, delta: f64) -> DragOutcome {
        if delta <= -DRAG_THRESHOLD {
            DragOutcome::Next
        } else if delta >= DRAG_THRESHOLD {
            DragOutcome::Prev
        } else if self.on_video_slide() {
            DragOutcome::TogglePlayback
        } else {
            DragOutcome::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_past_last_slide() {
        let mut state = CarouselState::new(3, false);
        state.next();
        state.next();
        assert_eq!(state.index(), 2);
        state.next();
        assert_eq!(state.index(), 0);
        assert_eq!(state.direction(), 1);
    }

    #[test]
    fn test_prev_wraps_to_last_slide() {
        let mut state = CarouselState::new(3, false);
        state.prev();
        assert_eq!(state.index(), 2);
        assert_eq!(state.direction(), -1);
    }

    #[test]
    fn test_tick_advances_only_while_auto_playing() {
        let mut state = CarouselState::new(3, false);
        state.tick();
        assert_eq!(state.index(), 1);

        state.pause_autoplay();
        state.tick();
        assert_eq!(state.index(), 1);

        state.resume_autoplay();
        state.tick();
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_unfinished_video_slide_gates_autoplay() {
        let mut state = CarouselState::new(3, true);
        assert!(state.on_video_slide());
        assert!(!state.autoplay_active());

        state.tick();
        state.tick();
        assert_eq!(state.index(), 0, "timer must not advance past the video");
    }

    #[test]
    fn test_video_finish_lands_on_first_image_and_resumes() {
        let mut state = CarouselState::new(3, true);
        state.video_finished();
        assert_eq!(state.index(), 1);
        assert_eq!(state.image_index(), 0);
        assert!(state.autoplay_active());

        // wrapping back onto the finished video slide no longer gates
        state.next();
        state.next();
        state.next();
        assert!(state.on_video_slide());
        state.tick();
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_manual_navigation_off_video_then_resume() {
        let mut state = CarouselState::new(3, true);
        state.next();
        state.pause_autoplay();
        assert!(!state.autoplay_active());
        state.resume_autoplay();
        assert!(state.autoplay_active());
        assert_eq!(state.image_index(), 0);
    }

    #[test]
    fn test_drag_past_threshold_swipes() {
        let state = CarouselState::new(3, false);
        assert_eq!(state.classify_drag(-80.0), DragOutcome::Next);
        assert_eq!(state.classify_drag(80.0), DragOutcome::Prev);
        assert_eq!(state.classify_drag(-DRAG_THRESHOLD), DragOutcome::Next);
    }

    #[test]
    fn test_drag_below_threshold_does_not_change_slides() {
        let mut state = CarouselState::new(3, false);
        assert_eq!(state.classify_drag(-20.0), DragOutcome::None);
        assert_eq!(state.classify_drag(20.0), DragOutcome::None);

        let before = state.index();
        state.tick();
        assert_eq!(state.index(), (before + 1) % 3);
    }

    #[test]
    fn test_short_drag_on_video_slide_toggles_playback() {
        let mut state = CarouselState::new(3, true);
        assert_eq!(state.classify_drag(-10.0), DragOutcome::TogglePlayback);
        assert!(!state.video_paused());
        state.toggle_video_playback();
        assert!(state.video_paused());
        state.toggle_video_playback();
        assert!(!state.video_paused());

        // off the video slide a short drag is inert
        state.next();
        assert_eq!(state.classify_drag(-10.0), DragOutcome::None);
    }

    #[test]
    fn test_single_slide_deck_is_stable() {
        let mut state = CarouselState::new(1, false);
        state.next();
        assert_eq!(state.index(), 0);
        state.prev();
        assert_eq!(state.index(), 0);
        state.tick();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_video_only_deck() {
        let mut state = CarouselState::new(0, true);
        assert_eq!(state.len(), 1);
        state.video_finished();
        assert_eq!(state.index(), 0);
        state.tick();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_empty_deck() {
        let mut state = CarouselState::new(0, false);
        assert!(state.is_empty());
        state.next();
        state.prev();
        state.tick();
        assert_eq!(state.index(), 0);
    }
}
