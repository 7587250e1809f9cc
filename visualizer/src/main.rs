use clap::Parser;
use fdtdcore::frames::{read_matrix, FrameMatrix, Playback};
use iced::{
    mouse, time,
    widget::{
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, text, Container,
    },
    Color, Element, Length, Point, Rectangle, Renderer, Subscription, Task, Theme,
};
use std::{path::PathBuf, time::Duration};

#[derive(Parser)]
#[command(author, version, about = "Frame-by-frame animator for recorded field runs")]
struct Args {
    /// CSV frame matrix recorded by the simulator
    #[arg(default_value = "output.csv")]
    frames: PathBuf,
    /// Delay between frames, in milliseconds
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,
}

fn main() -> iced::Result {
    iced::application(Animator::boot, Animator::update, Animator::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Animator) -> String {
    "FDTD-1D Animator".into()
}

fn application_subscription(state: &Animator) -> Subscription<Message> {
    match &state.playback {
        Some(playback) if !playback.is_finished() => {
            time::every(tick_interval(state.delay_ms)).map(|_| Message::Tick)
        }
        _ => Subscription::none(),
    }
}

fn application_theme(_: &Animator) -> Theme {
    Theme::Dark
}

fn tick_interval(delay_ms: u64) -> Duration {
    // The timer needs a positive period; clamp a zero delay to 1 ms.
    Duration::from_millis(delay_ms.max(1))
}

#[derive(Debug)]
struct Animator {
    playback: Option<Playback>,
    delay_ms: u64,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {
    FramesLoaded(Result<FrameMatrix, String>),
    Tick,
}

impl Animator {
    fn boot() -> (Self, Task<Message>) {
        let args = Args::parse();
        let delay_ms = args.delay_ms;
        (
            Animator {
                playback: None,
                delay_ms,
                status: format!("Loading {}...", args.frames.display()),
            },
            Task::perform(load_frames(args.frames), Message::FramesLoaded),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::FramesLoaded(Ok(frames)) => {
                // The one console line: the shape of the loaded matrix.
                println!("E.shape : {:?}", frames.shape());
                let playback = Playback::new(frames);
                state.status = if playback.total_frames() == 0 {
                    "Loaded an empty frame matrix".into()
                } else {
                    format!(
                        "frame 1/{} ({} samples)",
                        playback.total_frames(),
                        playback.matrix().samples_per_frame()
                    )
                };
                state.playback = Some(playback);
                Task::none()
            }
            Message::FramesLoaded(Err(err)) => {
                state.status = format!("Load error: {err}");
                Task::none()
            }
            Message::Tick => {
                if let Some(playback) = &mut state.playback {
                    playback.advance();
                    if playback.total_frames() > 0 {
                        state.status = format!(
                            "frame {}/{} ({} samples)",
                            playback.frame_index() + 1,
                            playback.total_frames(),
                            playback.matrix().samples_per_frame()
                        );
                    }
                }
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let data = state
            .playback
            .as_ref()
            .and_then(|playback| playback.current())
            .map(|row| row.to_vec())
            .unwrap_or_default();

        let trace = Canvas::new(FieldTrace { data })
            .width(Length::Fill)
            .height(Length::Fill);

        let layout = column![trace, text(&state.status).size(14)]
            .spacing(8)
            .padding(12);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

async fn load_frames(path: PathBuf) -> Result<FrameMatrix, String> {
    tokio::task::spawn_blocking(move || read_matrix(&path).map_err(|err| err.to_string()))
        .await
        .map_err(|err| err.to_string())?
}

#[derive(Clone)]
struct FieldTrace {
    data: Vec<f32>,
}

impl canvas::Program<Message> for FieldTrace {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        if self.data.len() > 1 {
            let min = self.data.iter().cloned().fold(f32::INFINITY, f32::min);
            let max = self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
            let range = max - min;
            let width = bounds.width;
            let step = width / (self.data.len() as f32 - 1.0);
            let path = Path::new(|builder| {
                for (i, value) in self.data.iter().enumerate() {
                    let x = i as f32 * step;
                    // A flat frame renders on the midline.
                    let normalized = if range > f32::EPSILON {
                        (value - min) / range
                    } else {
                        0.5
                    };
                    let y = bounds.height - normalized * bounds.height;
                    if i == 0 {
                        builder.move_to(Point::new(x, y));
                    } else {
                        builder.line_to(Point::new(x, y));
                    }
                }
            });

            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(2.5)
                    .with_color(Color::from_rgb(0.18, 0.72, 0.89)),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state() -> Animator {
        let mut state = Animator {
            playback: None,
            delay_ms: 50,
            status: String::new(),
        };
        let frames =
            FrameMatrix::from_rows(&[vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]]).unwrap();
        let _ = Animator::update(&mut state, Message::FramesLoaded(Ok(frames)));
        state
    }

    #[test]
    fn loaded_status_reports_the_shape() {
        let state = loaded_state();
        assert_eq!(state.status, "frame 1/3 (2 samples)");
    }

    #[test]
    fn ticks_advance_the_frame_counter() {
        let mut state = loaded_state();
        let _ = Animator::update(&mut state, Message::Tick);
        assert_eq!(state.status, "frame 2/3 (2 samples)");
    }

    #[test]
    fn load_errors_land_in_the_status_line() {
        let mut state = loaded_state();
        let _ = Animator::update(&mut state, Message::FramesLoaded(Err("bad row".into())));
        assert_eq!(state.status, "Load error: bad row");
    }

    #[test]
    fn zero_delay_is_clamped_to_one_millisecond() {
        assert_eq!(tick_interval(0), Duration::from_millis(1));
        assert_eq!(tick_interval(50), Duration::from_millis(50));
    }
}
