use yew::prelude::*;

const SPLINE_SCENE: &str = "https://prod.spline.design/4cHQr84zOGAHOehh/scene.splinecode";

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-glow" aria-hidden="true">
                <div class="hero-glow-violet"></div>
                <div class="hero-glow-orange"></div>
                <div class="hero-glow-blue"></div>
            </div>
            <div class="hero-scene">
                <spline-viewer url={SPLINE_SCENE}></spline-viewer>
            </div>
            <div class="hero-content">
                <span class="hero-badge">{"New • AI media studio"}</span>
                <h1>{"Generate images and videos with a single prompt"}</h1>
                <p class="hero-subtitle">
                    {"Type what you imagine. Get stylized images or short video clips in seconds. Built for speed, creativity, and sharing."}
                </p>
                <div class="hero-actions">
                    <a href="#studio" class="hero-cta">{"Open Studio"}</a>
                    <a href="#how" class="hero-secondary">{"How it works"}</a>
                </div>
            </div>
            <style>
                {r#"
        .hero {
            position: relative;
            min-height: 80vh;
            width: 100%;
            overflow: hidden;
            color: #fff;
            background: linear-gradient(135deg, #0b1020, #0f1130, #0b0f24);
        }
        .hero-glow {
            position: absolute;
            inset: 0;
            opacity: 0.7;
            pointer-events: none;
        }
        .hero-glow > div {
            position: absolute;
            inset: 0;
        }
        .hero-glow-violet {
            background: radial-gradient(circle at center, rgba(150, 100, 255, 0.25), transparent 60%);
            filter: blur(64px);
        }
        .hero-glow-orange {
            background: radial-gradient(60% 60% at 50% 50%, rgba(255, 120, 70, 0.15), transparent 60%);
        }
        .hero-glow-blue {
            background: radial-gradient(40% 40% at 50% 50%, rgba(90, 200, 255, 0.15), transparent 60%);
        }
        .hero-scene {
            position: absolute;
            inset: 0;
        }
        .hero-scene spline-viewer {
            width: 100%;
            height: 100%;
        }
        .hero-content {
            position: relative;
            z-index: 10;
            max-width: 72rem;
            margin: 0 auto;
            padding: 6rem 1.5rem 4rem;
            text-align: center;
        }
        .hero-badge {
            display: inline-flex;
            border-radius: 9999px;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(255, 255, 255, 0.05);
            padding: 0.25rem 0.75rem;
            font-size: 0.75rem;
            text-transform: uppercase;
            letter-spacing: 0.05em;
            color: rgba(255, 255, 255, 0.8);
        }
        .hero h1 {
            margin-top: 1.5rem;
            font-size: 3.75rem;
            font-weight: 600;
            line-height: 1.2;
        }
        .hero-subtitle {
            max-width: 42rem;
            margin: 1rem auto 0;
            color: rgba(255, 255, 255, 0.7);
        }
        .hero-actions {
            margin-top: 2rem;
            display: flex;
            justify-content: center;
            gap: 0.75rem;
        }
        .hero-cta,
        .hero-secondary {
            border-radius: 9999px;
            padding: 0.75rem 1.5rem;
            font-weight: 500;
            text-decoration: none;
        }
        .hero-cta {
            background: #fff;
            color: #000;
        }
        .hero-secondary {
            border: 1px solid rgba(255, 255, 255, 0.2);
            color: rgba(255, 255, 255, 0.8);
        }
        @media (max-width: 768px) {
            .hero h1 {
                font-size: 2.25rem;
            }
        }
                "#}
            </style>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>{"Built with an AI-first workflow. Add your REPLICATE_API_TOKEN to unlock real generation."}</p>
            <style>
                {r#"
        .footer {
            border-top: 1px solid rgba(255, 255, 255, 0.1);
            background: #0b0f24;
            padding: 2.5rem 0;
            text-align: center;
            color: rgba(255, 255, 255, 0.6);
        }
                "#}
            </style>
        </footer>
    }
}
