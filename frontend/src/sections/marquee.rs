use yew::prelude::*;

use crate::layout::viewport::use_lite_animations;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: &'static [&'static str],
}

#[function_component(MarqueeBanner)]
pub fn marquee_banner(props: &MarqueeProps) -> Html {
    let lite = use_lite_animations();
    // Two copies so the track can loop at -50% without a seam.
    let track = props.items.iter().chain(props.items.iter());

    html! {
        <section class={classes!("marquee", lite.then(|| "lite"))}>
            <div class="marquee-track">
                { for track.enumerate().map(|(i, item)| html! {
                    <span class="marquee-item" key={i}>
                        {*item}
                        <span class="marquee-dot">{"✦"}</span>
                    </span>
                }) }
            </div>
            <style>{r#"
                .marquee {
                    overflow: hidden;
                    background: #9B59B6;
                    padding: 1.25rem 0;
                    white-space: nowrap;
                }
                .marquee-track {
                    display: inline-flex;
                    animation: marqueeScroll 30s linear infinite;
                }
                .marquee.lite .marquee-track {
                    animation-duration: 45s;
                }
                .marquee-item {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(1.25rem, 2.5vw, 2rem);
                    color: #fff;
                    padding: 0 2rem;
                }
                .marquee-dot {
                    color: #F1C40F;
                    margin-left: 4rem;
                }
                @keyframes marqueeScroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
            "#}</style>
        </section>
    }
}
