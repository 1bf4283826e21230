use iced::{
    mouse, time,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, scrollable, text, text_input, Column, Container,
    },
    Alignment, Color, Element, Length, Pixels, Point, Rectangle, Renderer, Subscription, Task,
    Theme,
};
use radarcore::interface::{Category, DetectionReport, DetectionResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Categories drawn on the scope; unknown returns only show up in the counts.
const PLOTTED: [Category; 5] = [
    Category::Friendly,
    Category::Enemy,
    Category::Drone,
    Category::Missile,
    Category::FighterJet,
];

fn main() -> iced::Result {
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Radar Detection Visualizer".into()
}

fn application_subscription(_: &Visualizer) -> Subscription<Message> {
    time::every(Duration::from_secs(1)).map(|_| Message::Tick)
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Friendly => Color::from_rgb(0.2, 0.8, 0.3),
        Category::Enemy => Color::from_rgb(0.9, 0.2, 0.2),
        Category::Drone => Color::from_rgb(0.85, 0.85, 0.85),
        Category::Missile => Color::from_rgb(1.0, 0.65, 0.0),
        Category::FighterJet => Color::from_rgb(0.75, 0.4, 0.9),
        Category::Unknown => Color::from_rgb(0.45, 0.45, 0.45),
    }
}

fn marker_radius(category: Category) -> f32 {
    match category {
        Category::Drone => 3.0,
        _ => 4.0,
    }
}

#[derive(Debug)]
struct Visualizer {
    config: ConfigForm,
    payload: Option<VisualizationPayload>,
    status: String,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    PayloadFetched(Result<VisualizationPayload, String>),
    ConfigFieldChanged(ConfigField, String),
    SubmitConfig,
    ConfigSubmitted(Result<String, String>),
}

#[derive(Debug, Clone, Copy)]
enum ConfigField {
    Scenario,
    Seed,
    RangeKm,
    ChallengeShift,
    Description,
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        (
            Visualizer {
                config: ConfigForm::default(),
                payload: None,
                status: "Waiting for detection report...".into(),
                history: Vec::new(),
            },
            Task::perform(fetch_payload(), Message::PayloadFetched),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => Task::perform(fetch_payload(), Message::PayloadFetched),
            Message::PayloadFetched(Ok(payload)) => {
                if let Some(report) = &payload.report {
                    let summary = format!(
                        "{}: {} detections within {:.2} km",
                        payload.scenario.as_deref().unwrap_or("scenario"),
                        report.detections.len(),
                        report.range_km
                    );
                    if state.history.last() != Some(&summary) {
                        state.push_history(summary.clone());
                    }
                    state.status = summary;
                }
                state.payload = Some(payload);
                Task::none()
            }
            Message::PayloadFetched(Err(err)) => {
                state.status = format!("Bridge error: {err}");
                Task::none()
            }
            Message::ConfigFieldChanged(field, value) => {
                state.config.update_field(field, value);
                Task::none()
            }
            Message::SubmitConfig => {
                let payload = state.config.to_payload();
                Task::perform(post_config(payload), Message::ConfigSubmitted)
            }
            Message::ConfigSubmitted(Ok(message)) => {
                state.status = message;
                state.push_history("Scenario submitted".into());
                Task::none()
            }
            Message::ConfigSubmitted(Err(err)) => {
                state.status = format!("Config error: {err}");
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let report = state
            .payload
            .as_ref()
            .and_then(|payload| payload.report.clone());
        let notes = state
            .payload
            .as_ref()
            .map(|payload| payload.notes.clone())
            .unwrap_or_default();

        let config_column = column![
            text("Scenario").size(26),
            text_input("Scenario (cell | threshold)", &state.config.scenario)
                .on_input(|value| Message::ConfigFieldChanged(ConfigField::Scenario, value))
                .padding(6),
            text_input("Seed", &state.config.seed)
                .on_input(|value| Message::ConfigFieldChanged(ConfigField::Seed, value))
                .padding(6),
            text_input("Fixed range (km)", &state.config.range_km)
                .on_input(|value| Message::ConfigFieldChanged(ConfigField::RangeKm, value))
                .padding(6),
            text_input("Challenge shift", &state.config.challenge_shift)
                .on_input(|value| Message::ConfigFieldChanged(ConfigField::ChallengeShift, value))
                .padding(6),
            text_input("Description", &state.config.description)
                .on_input(|value| Message::ConfigFieldChanged(ConfigField::Description, value))
                .padding(6),
            button("POST scenario")
                .on_press(Message::SubmitConfig)
                .padding(10),
            text(&state.status).size(14),
            column![
                text("Parameter definitions").size(16),
                text("Scenario: cell uses a fixed range and banded classification; threshold derives range from the radar equation.")
                    .size(12),
                text("Seed: deterministic PRNG seeding so scenarios replay consistently.")
                    .size(12),
                text("Fixed range: overrides the scenario's detection radius.").size(12),
                text("Challenge shift: rotation key friendly aircraft must answer with.")
                    .size(12),
                text("Description: scenario name shown in the activity log.").size(12),
            ]
            .spacing(4)
            .padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(360.0));

        let counts_info = if let Some(report) = &report {
            column![
                text(format!("Challenge: {}", report.challenge)).size(14),
                text(format!(
                    "Friendly Jets: {}  Enemy Jets: {}  Drones: {}  Missiles: {}",
                    report.counts.friendly,
                    report.counts.enemy,
                    report.counts.drone,
                    report.counts.missile
                ))
                .size(18),
                text(format!(
                    "Fighter Jets: {}  Unknown: {}",
                    report.counts.fighter_jet, report.counts.unknown
                ))
                .size(14),
            ]
            .spacing(4)
        } else {
            column![text("Detections: n/a").size(18)]
        };

        let legend = PLOTTED.iter().fold(row![].spacing(16), |legend, category| {
            legend.push(text(category.label()).size(14).color(category_color(*category)))
        });

        let scope = Canvas::new(RadarScope::new(report.as_ref()))
            .width(Length::Fill)
            .height(Length::Fixed(480.0));

        let detection_entries = match &report {
            Some(report) if !report.detections.is_empty() => report
                .detections
                .iter()
                .take(12)
                .fold(Column::new().spacing(4), |col, detection| {
                    col.push(
                        text(format!(
                            "#{} {}: ({:.1}, {:.1}) km | {:.2} km out",
                            detection.track_id,
                            detection.category,
                            detection.position.x,
                            detection.position.y,
                            detection.distance_from_radar()
                        ))
                        .size(12),
                    )
                }),
            _ => Column::new().push(text("No detections to render").size(12)),
        };

        let notes_list = if notes.is_empty() {
            Column::new().push(text("No notes yet").size(14))
        } else {
            notes
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, note| {
                    col.push(text(note.clone()).size(14))
                })
        };

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let report_column = column![
            text("Radar Detection").size(26),
            counts_info,
            legend,
            scope,
            text("Detections").size(16),
            Container::new(scrollable(detection_entries).height(Length::Fixed(140.0))).padding(6),
            text("Run notes").size(16),
            Container::new(scrollable(notes_list).height(Length::Fixed(80.0))).padding(6),
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(90.0))).padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fill);

        let layout = row![config_column, report_column]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

async fn fetch_payload() -> Result<VisualizationPayload, String> {
    let response = reqwest::get("http://127.0.0.1:9000/payload")
        .await
        .map_err(|e| e.to_string())?;
    response
        .json::<VisualizationPayload>()
        .await
        .map_err(|e| e.to_string())
}

async fn post_config(config: ScenarioConfig) -> Result<String, String> {
    let client = reqwest::Client::new();
    let response = client
        .post("http://127.0.0.1:9000/ingest-config")
        .json(&config)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status().is_success() {
        Ok("Scenario submitted".into())
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_else(|_| "".into());
        Err(format!("{}: {}", status, text))
    }
}

#[derive(Debug, Clone)]
struct ConfigForm {
    scenario: String,
    seed: String,
    range_km: String,
    challenge_shift: String,
    description: String,
}

impl ConfigForm {
    fn default() -> Self {
        Self {
            scenario: "cell".into(),
            seed: "312".into(),
            range_km: String::new(),
            challenge_shift: "4".into(),
            description: "Visualizer scenario".into(),
        }
    }

    fn update_field(&mut self, field: ConfigField, value: String) {
        match field {
            ConfigField::Scenario => self.scenario = value,
            ConfigField::Seed => self.seed = value,
            ConfigField::RangeKm => self.range_km = value,
            ConfigField::ChallengeShift => self.challenge_shift = value,
            ConfigField::Description => self.description = value,
        }
    }

    fn to_payload(&self) -> ScenarioConfig {
        let scenario = self.scenario.trim().to_ascii_lowercase();
        ScenarioConfig {
            scenario: if scenario.is_empty() {
                None
            } else {
                Some(scenario)
            },
            seed: self.seed.parse().ok(),
            range_km: self.range_km.parse().ok(),
            challenge_shift: self.challenge_shift.parse().ok(),
            description: if self.description.trim().is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ScenarioConfig {
    scenario: Option<String>,
    seed: Option<u64>,
    range_km: Option<f64>,
    challenge_shift: Option<i32>,
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct VisualizationPayload {
    #[serde(default)]
    scenario: Option<String>,
    #[serde(default)]
    report: Option<DetectionReport>,
    #[serde(default)]
    notes: Vec<String>,
}

/// Plan-position plot: radar at the centre, range ring, one marker per detection.
#[derive(Clone)]
struct RadarScope {
    range_km: f64,
    detections: Vec<DetectionResult>,
    origin: (f64, f64),
}

impl RadarScope {
    fn new(report: Option<&DetectionReport>) -> Self {
        match report {
            Some(report) => Self {
                range_km: report.range_km,
                detections: report.detections.clone(),
                origin: (report.radar_position.x, report.radar_position.y),
            },
            None => Self {
                range_km: 0.0,
                detections: Vec::new(),
                origin: (0.0, 0.0),
            },
        }
    }
}

impl canvas::Program<Message> for RadarScope {
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
            Color::from_rgb(0.02, 0.02, 0.04),
        );

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let half_extent = bounds.width.min(bounds.height) / 2.0 - 12.0;
        // Leave a 10 km margin around the range ring.
        let scale = if self.range_km > 0.0 {
            half_extent / (self.range_km + 10.0) as f32
        } else {
            0.0
        };
        let ring_radius = self.range_km as f32 * scale;

        let axes = Path::new(|builder| {
            builder.move_to(Point::new(center.x - half_extent, center.y));
            builder.line_to(Point::new(center.x + half_extent, center.y));
            builder.move_to(Point::new(center.x, center.y - half_extent));
            builder.line_to(Point::new(center.x, center.y + half_extent));
        });
        frame.stroke(
            &axes,
            Stroke::default()
                .with_color(Color::from_rgb(0.35, 0.35, 0.45))
                .with_width(1.0),
        );

        if ring_radius > 0.0 {
            let ring = Path::new(|builder| builder.circle(center, ring_radius));
            frame.stroke(
                &ring,
                Stroke::default()
                    .with_color(Color::from_rgb(0.2, 0.4, 0.95))
                    .with_width(2.0),
            );
        }

        let radar = Path::new(|builder| builder.circle(center, 7.0));
        frame.fill(&radar, Color::from_rgb(0.2, 0.4, 0.95));

        for category in PLOTTED {
            let color = category_color(category);
            let markers = self
                .detections
                .iter()
                .filter(|detection| detection.category == category);
            for (idx, detection) in markers.enumerate() {
                let x = center.x + (detection.position.x - self.origin.0) as f32 * scale;
                let y = center.y - (detection.position.y - self.origin.1) as f32 * scale;
                let marker =
                    Path::new(|builder| builder.circle(Point::new(x, y), marker_radius(category)));
                frame.fill(&marker, color);
                frame.fill_text(canvas::Text {
                    content: format!(
                        "{} {}\n{:.2} km",
                        category.label(),
                        idx + 1,
                        detection.distance_from_radar()
                    ),
                    position: Point::new(x + 6.0, y - 6.0),
                    color,
                    size: Pixels(10.0),
                    ..canvas::Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}
