use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::model::Stat;
use crate::layout::viewport::{use_in_view_once, use_lite_animations};

const FRAME_MS: u32 = 16;
const FULL_DURATION_MS: f64 = 2_500.0;
const LITE_DURATION_MS: f64 = 1_500.0;
const STAGGER_MS: f64 = 100.0;

/// Ease-out cubic from 0 to `target`. Negative elapsed time (still in the
/// stagger delay) reads as 0.
pub fn eased_value(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    if elapsed_ms <= 0.0 {
        return 0;
    }
    let progress = elapsed_ms / duration_ms;
    let eased = 1.0 - (1.0 - progress).powi(3);
    (f64::from(target) * eased).round() as u32
}

/// Frame-by-frame progress of one counter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: f64,
    elapsed_ms: f64,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: f64, delay_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            elapsed_ms: -delay_ms,
        }
    }

    /// Advances one frame. Returns the value to show and whether counting is done.
    pub fn tick(&mut self, frame_ms: f64) -> (u32, bool) {
        self.elapsed_ms += frame_ms;
        let value = eased_value(self.target, self.elapsed_ms, self.duration_ms);
        (value, self.elapsed_ms >= self.duration_ms)
    }
}

#[derive(Properties, PartialEq)]
struct CounterProps {
    target: u32,
    suffix: &'static str,
    delay_ms: f64,
}

#[function_component(Counter)]
fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view_once(node.clone(), 30.0);
    let lite = use_lite_animations();
    let shown = use_state_eq(|| 0_u32);
    let running = use_state_eq(|| false);
    let count = use_mut_ref(|| CountUp::new(props.target, FULL_DURATION_MS, props.delay_ms));

    {
        let running = running.clone();
        let count = count.clone();
        let target = props.target;
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |in_view| {
                if *in_view {
                    let duration = if lite { LITE_DURATION_MS } else { FULL_DURATION_MS };
                    *count.borrow_mut() = CountUp::new(target, duration, delay_ms);
                    running.set(true);
                }
                || ()
            },
            in_view,
        );
    }

    {
        let shown = shown.clone();
        let running = running.clone();
        let delay = if *running { FRAME_MS } else { 0 };
        // A zero delay stops the interval once the target is reached.
        use_interval(
            move || {
                let (value, done) = count.borrow_mut().tick(f64::from(FRAME_MS));
                shown.set(value);
                if done {
                    running.set(false);
                }
            },
            delay,
        );
    }

    html! {
        <span ref={node}>{*shown}{props.suffix}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub stats: &'static [Stat],
}

#[function_component(StatsSection)]
pub fn stats_section(props: &StatsProps) -> Html {
    html! {
        <section class="stats-section">
            <div class="stats-grid">
                { for props.stats.iter().enumerate().map(|(i, stat)| html! {
                    <div class="stat-card" key={stat.label}>
                        <div class="stat-value">
                            <Counter target={stat.value} suffix={stat.suffix} delay_ms={STAGGER_MS * i as f64} />
                        </div>
                        <div class="stat-label">{stat.label}</div>
                        <p class="stat-description">{stat.description}</p>
                        <div class="stat-rule"></div>
                    </div>
                }) }
            </div>
            <style>{r#"
                .stats-section {
                    background: #F5F0FA;
                    padding: 6rem 1.5rem;
                }
                .stats-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .stat-value {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2.5rem, 5vw, 3.75rem);
                    color: #0A0A0A;
                    transition: color 0.3s;
                }
                .stat-card:hover .stat-value {
                    color: #9B59B6;
                }
                .stat-label {
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-size: 0.75rem;
                    color: #0A0A0A;
                }
                .stat-description {
                    color: rgba(10, 10, 10, 0.5);
                    font-size: 0.8rem;
                }
                .stat-rule {
                    margin: 1rem auto 0;
                    width: 2rem;
                    height: 2px;
                    background: rgba(241, 196, 15, 0.3);
                    transition: all 0.3s;
                }
                .stat-card:hover .stat-rule {
                    width: 3rem;
                    background: rgba(241, 196, 15, 0.7);
                }
            "#}</style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_zero_to_target() {
        assert_eq!(eased_value(98, 0.0, 2_500.0), 0);
        assert_eq!(eased_value(98, 2_500.0, 2_500.0), 98);
        assert_eq!(eased_value(98, 9_000.0, 2_500.0), 98);
    }

    #[test]
    fn waits_out_the_stagger_delay() {
        assert_eq!(eased_value(50, -100.0, 2_500.0), 0);
    }

    #[test]
    fn eases_out() {
        // Past the halfway mark in value well before half the time.
        let early = eased_value(100, 500.0, 2_500.0);
        assert!(early > 40, "{early}");
        let mut last = 0;
        for step in 0..=25 {
            let v = eased_value(100, f64::from(step) * 100.0, 2_500.0);
            assert!(v >= last);
            last = v;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn count_finishes_exactly_at_the_duration() {
        let mut count = CountUp::new(98, 160.0, 0.0);
        for _ in 0..9 {
            let (_, done) = count.tick(16.0);
            assert!(!done);
        }
        assert_eq!(count.tick(16.0), (98, true));
        assert_eq!(count.tick(16.0), (98, true));
    }

    #[test]
    fn stagger_delay_postpones_the_finish() {
        let mut count = CountUp::new(50, 32.0, 32.0);
        assert_eq!(count.tick(16.0), (0, false));
        assert_eq!(count.tick(16.0), (0, false));
        assert!(!count.tick(16.0).1);
        assert_eq!(count.tick(16.0), (50, true));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(eased_value(12, 0.0, 0.0), 12);
    }
}
