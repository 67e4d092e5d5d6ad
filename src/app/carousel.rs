mod state;

use std::time::Duration;

use leptos::{either::Either, ev, html, prelude::*};
use leptos_use::{use_interval_fn, utils::Pausable};

use state::{CarouselState, DragOutcome};

static AUTOPLAY_INTERVAL_MS: u64 = 4000;
static RESUME_DELAY_MS: u64 = 300;

/// Image/video carousel. An optional video occupies the leading slide and
/// holds off the autoplay timer until it finishes playing. Navigation: timer,
/// arrow buttons, keyboard arrows (opt-in), and pointer drag/swipe.
#[component]
pub fn MediaCarousel(
    images: Vec<String>,
    #[prop(optional_no_strip)] video_url: Option<String>,
    #[prop(into, default = String::new())] title: String,
    #[prop(default = true)] auto_play: bool,
    #[prop(default = false)] keyboard: bool,
) -> impl IntoView {
    let has_video = video_url.is_some();
    let image_count = images.len();
    if image_count == 0 && !has_video {
        return ().into_any();
    }
    let total = image_count + usize::from(has_video);

    let state = RwSignal::new(CarouselState::new(image_count, has_video));
    // Slide position as seen by the view. Memoized so playback toggles and
    // gated timer ticks don't recreate the media element mid-play.
    let current = Memo::new(move |_| {
        let s = state.get();
        (s.index(), s.direction())
    });
    let images = StoredValue::new(images);
    let video_url = StoredValue::new(video_url);
    let video_ref = NodeRef::<html::Video>::new();
    let drag_origin = StoredValue::new(None::<f64>);

    let Pausable { pause, resume, .. } =
        use_interval_fn(move || state.update(|s| s.tick()), AUTOPLAY_INTERVAL_MS);
    if !auto_play {
        pause();
        state.update(|s| s.pause_autoplay());
    }

    // Manual navigation stops the timer and restarts it a beat later, which
    // also resets its phase. An unfinished video slide keeps the ticks inert.
    let manual = Callback::new(move |dir: i8| {
        state.update(|s| {
            if dir >= 0 {
                s.next()
            } else {
                s.prev()
            }
            s.pause_autoplay();
        });
        if auto_play {
            pause();
            let resume = resume.clone();
            set_timeout(
                move || {
                    state.update(|s| s.resume_autoplay());
                    resume();
                },
                Duration::from_millis(RESUME_DELAY_MS),
            );
        }
    });

    if keyboard {
        Effect::new(move |_| {
            let handle = window_event_listener(ev::keydown, move |ev| match ev.key().as_str() {
                "ArrowRight" => manual.run(1),
                "ArrowLeft" => manual.run(-1),
                _ => {}
            });
            on_cleanup(move || handle.remove());
        });
    }

    let on_release = move |client_x: f64| {
        let Some(start) = drag_origin.get_value() else {
            return;
        };
        drag_origin.set_value(None);
        let delta = client_x - start;
        match state.with_untracked(|s| s.classify_drag(delta)) {
            DragOutcome::Next => manual.run(1),
            DragOutcome::Prev => manual.run(-1),
            DragOutcome::TogglePlayback => {
                let was_paused = state.with_untracked(|s| s.video_paused());
                if let Some(video) = video_ref.get_untracked() {
                    if was_paused {
                        let _ = video.play();
                    } else {
                        let _ = video.pause();
                    }
                }
                state.update(|s| s.toggle_video_playback());
            }
            DragOutcome::None => {}
        }
    };

    let slide = move || {
        let (index, direction) = current.get();
        let slide_class = if direction >= 0 {
            "carousel-slide slide-from-right"
        } else {
            "carousel-slide slide-from-left"
        };
        if has_video && index == 0 {
            Either::Left(view! {
                <video
                    node_ref=video_ref
                    src=video_url.get_value().unwrap_or_default()
                    class=slide_class
                    autoplay=true
                    muted=true
                    prop:muted=true
                    playsinline=true
                    on:ended=move |_| state.update(|st| st.video_finished())
                ></video>
            })
        } else {
            let src = images
                .with_value(|imgs| imgs.get(index - usize::from(has_video)).cloned())
                .unwrap_or_default();
            Either::Right(view! {
                <img src=src alt=title.clone() class=slide_class draggable="false" />
            })
        }
    };

    view! {
        <div
            class="relative aspect-video bg-black/60 overflow-hidden select-none cursor-grab active:cursor-grabbing group"
            on:pointerdown=move |ev| {
                ev.prevent_default();
                drag_origin.set_value(Some(ev.client_x() as f64));
            }
            on:pointerup=move |ev| on_release(ev.client_x() as f64)
            on:pointerleave=move |_| drag_origin.set_value(None)
        >
            {slide}
            <div class="absolute top-2 right-2 text-[10px] font-mono text-gray-400 bg-black/60 px-2 py-1 border border-gray-700 z-10">
                {move || format!("{:02} / {:02}", current.get().0 + 1, total)}
            </div>
            {(total > 1)
                .then(|| {
                    view! {
                        <button
                            aria-label="Previous slide"
                            class="absolute left-2 top-1/2 -translate-y-1/2 z-20 w-8 h-8 hidden md:flex items-center justify-center bg-black/60 hover:bg-black/80 border border-gray-700 hover:border-cyan-400 text-gray-400 hover:text-cyan-400 transition-all duration-200 backdrop-blur-sm cursor-pointer"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                manual.run(-1);
                            }
                        >
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                width="14"
                                height="14"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2.5"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            >
                                <polyline points="15 18 9 12 15 6" />
                            </svg>
                        </button>
                        <button
                            aria-label="Next slide"
                            class="absolute right-2 top-1/2 -translate-y-1/2 z-20 w-8 h-8 hidden md:flex items-center justify-center bg-black/60 hover:bg-black/80 border border-gray-700 hover:border-cyan-400 text-gray-400 hover:text-cyan-400 transition-all duration-200 backdrop-blur-sm cursor-pointer"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                manual.run(1);
                            }
                        >
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                width="14"
                                height="14"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2.5"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            >
                                <polyline points="9 18 15 12 9 6" />
                            </svg>
                        </button>
                    }
                })}
            {(total > 1)
                .then(|| {
                    view! {
                        <div class="absolute bottom-2 left-1/2 -translate-x-1/2 z-10 flex items-center gap-1.5">
                            {(0..total)
                                .map(|i| {
                                    view! {
                                        <div class=move || {
                                            if current.get().0 == i {
                                                "w-3 h-1.5 rounded-full bg-cyan-400 transition-all duration-200"
                                            } else {
                                                "w-1.5 h-1.5 rounded-full bg-gray-600 transition-all duration-200"
                                            }
                                        }></div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            <div class="absolute inset-x-0 bottom-0 h-12 bg-gradient-to-t from-black/60 to-transparent pointer-events-none"></div>
        </div>
    }
    .into_any()
}
