use yew::prelude::*;

use crate::components::dashboard_preview::DashboardPreview;
use crate::components::feature_card::FeatureCard;
use crate::components::icons::{Icon, IconSvg};
use crate::components::mobile_menu::MobileMenu;
use crate::components::nav::Nav;
use crate::content::{
    NavLink, BRAND, BRAND_ACCENT, BUILT_WITH, COPYRIGHT, FEATURES, FOOTER_BLURB, FOOTER_COLUMNS,
    FREE_PLAN, HERO_BADGE, HERO_SUBTITLE, HERO_TITLE, HERO_TITLE_ACCENT, PRICING_BULLETS,
    SOCIAL_ICONS, STATS, STATUS_LINE,
};
use crate::hooks::{use_mobile_menu, use_scrolled};
use crate::menu::MenuAction;
use crate::scroll::ScrollHandle;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub scroll: ScrollHandle,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let is_scrolled = use_scrolled(&props.scroll);
    let menu = use_mobile_menu();

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Toggle))
    };

    let on_select = {
        let menu = menu.clone();
        Callback::from(move |link: NavLink| menu.dispatch(MenuAction::SelectLink(link)))
    };

    html! {
        <div class="landing-page">
            <div class="background-glows">
                <div class="glow glow-neon"></div>
                <div class="glow glow-purple"></div>
            </div>

            <Nav
                is_scrolled={is_scrolled}
                menu_open={menu.is_open()}
                on_toggle={on_toggle}
                on_select={on_select.clone()}
            />
            <MobileMenu open={menu.is_open()} on_select={on_select} />

            <main class="landing-main">
                // Hero
                <section class="section hero">
                    <div class="hero-copy">
                        <div class="hero-badge">
                            <span class="badge-ping">
                                <span class="ping"></span>
                                <span class="dot"></span>
                            </span>
                            {HERO_BADGE}
                        </div>
                        <h1>
                            {HERO_TITLE}
                            <br />
                            <span class="neon-text">{HERO_TITLE_ACCENT}</span>
                        </h1>
                        <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                        <div class="hero-ctas">
                            <button type="button" class="cta-primary">
                                {"Start Free Automation"}
                                <IconSvg icon={Icon::ChevronRight} />
                            </button>
                            <button type="button" class="glass cta-secondary">
                                <IconSvg icon={Icon::Youtube} class="youtube" />
                                {"Watch Demo"}
                            </button>
                        </div>
                    </div>

                    <DashboardPreview />
                </section>

                // Features
                <section id="features" class="section features">
                    <div class="section-heading">
                        <h2>{"Everything you need to go viral."}</h2>
                        <p>{"Automate your content pipeline from upload to post."}</p>
                    </div>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <FeatureCard
                                key={feature.title}
                                icon={feature.icon}
                                title={feature.title}
                                description={feature.description}
                                delay_ms={feature.delay_ms}
                            />
                        }) }
                    </div>
                </section>

                // Pricing
                <section id="pricing" class="section pricing">
                    <div class="glass pricing-panel">
                        <div class="pricing-glow"></div>
                        <div class="pricing-grid">
                            <div class="pricing-copy">
                                <h2>{"Simple, Free"}<br />{"Pricing."}</h2>
                                <p>
                                    {"We believe AI automation should be accessible to every creator. Get started today with our generous free plan."}
                                </p>
                                <ul class="pricing-bullets">
                                    { for PRICING_BULLETS.iter().map(|bullet| html! {
                                        <li key={*bullet}>
                                            <span class="bullet-check">
                                                <IconSvg icon={Icon::CheckCircle} />
                                            </span>
                                            <span>{*bullet}</span>
                                        </li>
                                    }) }
                                </ul>
                            </div>

                            <div class="glass plan-card">
                                <div class="plan-badge">{FREE_PLAN.badge}</div>
                                <span class="plan-name">{FREE_PLAN.name}</span>
                                <div class="plan-price">{FREE_PLAN.price}</div>
                                <p class="plan-note">{FREE_PLAN.note}</p>
                                <button type="button" class="plan-cta">{FREE_PLAN.cta}</button>
                                <p class="plan-fine-print">{FREE_PLAN.fine_print}</p>
                            </div>
                        </div>
                    </div>
                </section>

                // Stats
                <section class="section stats">
                    { for STATS.iter().map(|stat| html! {
                        <div key={stat.label} class="stat">
                            <div class="stat-value neon-text">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }) }
                </section>
            </main>

            <footer class="landing-footer">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <IconSvg icon={Icon::Zap} class="logo-bolt neon" />
                            <span class="logo-text">{BRAND}{" "}<span class="accent">{BRAND_ACCENT}</span></span>
                        </div>
                        <p>{FOOTER_BLURB}</p>
                        <div class="footer-social">
                            { for SOCIAL_ICONS.iter().map(|icon| html! {
                                <span key={icon.label()} class="social-icon" title={icon.label()}>
                                    <IconSvg icon={*icon} />
                                </span>
                            }) }
                        </div>
                    </div>

                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div key={column.heading} class="footer-column">
                            <h5>{column.heading}</h5>
                            <ul>
                                { for column.links.iter().map(|link| html! {
                                    <li key={*link}>{*link}</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="footer-bottom">
                    <p>{COPYRIGHT}</p>
                    <div class="footer-meta">
                        <span>{STATUS_LINE}</span>
                        <span>{BUILT_WITH}</span>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                :root {
                    --brand-neon: #00ff9d;
                    --brand-purple: #8b5cf6;
                    --bg: #050505;
                    --muted: #9ca3af;
                    --faint: #6b7280;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    background: var(--bg);
                }

                .landing-page {
                    min-height: 100vh;
                    background: var(--bg);
                    color: #fff;
                    font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    overflow-x: hidden;
                }

                .landing-page ::selection {
                    background: var(--brand-neon);
                    color: #000;
                }

                .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                    flex-shrink: 0;
                }

                .glass {
                    background: rgba(255, 255, 255, 0.03);
                    backdrop-filter: blur(12px);
                    -webkit-backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }

                .neon-text {
                    color: var(--brand-neon);
                    text-shadow: 0 0 24px rgba(0, 255, 157, 0.45);
                }

                .accent {
                    color: var(--brand-neon);
                }

                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }

                @keyframes ping {
                    75%, 100% { transform: scale(2); opacity: 0; }
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-6px); }
                }

                @keyframes reveal {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes menuIn {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes menuOut {
                    from { opacity: 1; transform: translateY(0); }
                    to { opacity: 0; transform: translateY(-20px); }
                }

                .reveal {
                    opacity: 0;
                    animation: reveal 0.5s ease-out forwards;
                }

                /* Background */
                .background-glows {
                    position: fixed;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                    z-index: 0;
                }
                .glow {
                    position: absolute;
                    width: 40%;
                    height: 40%;
                    border-radius: 50%;
                    filter: blur(120px);
                    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                .glow-neon {
                    top: -10%;
                    left: -10%;
                    background: rgba(0, 255, 157, 0.1);
                }
                .glow-purple {
                    bottom: -10%;
                    right: -10%;
                    background: rgba(139, 92, 246, 0.1);
                    animation-delay: 2s;
                }

                /* Header */
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: all 0.3s ease;
                }
                .top-nav.expanded {
                    background: transparent;
                    padding: 1.5rem 0;
                    border-bottom: 1px solid transparent;
                }
                .top-nav.compact {
                    background: rgba(5, 5, 5, 0.7);
                    backdrop-filter: blur(12px);
                    -webkit-backdrop-filter: blur(12px);
                    padding: 0.75rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    text-decoration: none;
                }
                .logo-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.75rem;
                    background: var(--brand-neon);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transform: rotate(3deg);
                    transition: transform 0.2s ease;
                }
                .nav-logo:hover .logo-mark {
                    transform: rotate(0deg);
                }
                .logo-mark .icon {
                    color: #000;
                    fill: #000;
                    width: 1.5rem;
                    height: 1.5rem;
                }
                .logo-text {
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                }
                .nav-links {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--muted);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: var(--brand-neon);
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .nav-actions button {
                    font-family: inherit;
                    cursor: pointer;
                    border: none;
                }
                .nav-login {
                    display: none;
                    background: none;
                    color: var(--muted);
                    font-size: 0.875rem;
                    font-weight: 500;
                    transition: color 0.2s ease;
                }
                .nav-login:hover {
                    color: #fff;
                }
                .nav-start {
                    background: #fff;
                    color: #000;
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    font-size: 0.875rem;
                    font-weight: 700;
                    transition: all 0.2s ease;
                    box-shadow: 0 10px 15px rgba(255, 255, 255, 0.05);
                }
                .nav-start:hover {
                    background: var(--brand-neon);
                    transform: scale(1.05);
                }
                .nav-start:active {
                    transform: scale(0.95);
                }
                .burger-menu {
                    background: none;
                    color: #fff;
                    padding: 0;
                    display: flex;
                }
                .burger-menu .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                /* Mobile menu */
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    padding: 6rem 1.5rem 0;
                    background: rgba(5, 5, 5, 0.85);
                    backdrop-filter: blur(12px);
                    -webkit-backdrop-filter: blur(12px);
                }
                .mobile-menu.entering {
                    animation: menuIn 0.25s ease-out forwards;
                }
                .mobile-menu.leaving {
                    animation: menuOut 0.25s ease-in forwards;
                    pointer-events: none;
                }
                .mobile-menu-links {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    text-align: center;
                }
                .mobile-menu-link {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }
                .mobile-menu-divider {
                    width: 100%;
                    border: none;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .mobile-menu-cta {
                    width: 100%;
                    background: var(--brand-neon);
                    color: #000;
                    padding: 1rem 0;
                    border: none;
                    border-radius: 1rem;
                    font-family: inherit;
                    font-size: 1.125rem;
                    font-weight: 700;
                    cursor: pointer;
                }

                /* Sections */
                .landing-main {
                    position: relative;
                    z-index: 1;
                    padding: 8rem 0 5rem;
                }
                .section {
                    max-width: 80rem;
                    margin: 10rem auto 0;
                    padding: 0 1.5rem;
                }
                .section.hero {
                    margin-top: 0;
                    text-align: center;
                }
                .hero-copy {
                    animation: reveal 0.6s ease-out both;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    margin-bottom: 2rem;
                    border-radius: 999px;
                    background: rgba(0, 255, 157, 0.1);
                    border: 1px solid rgba(0, 255, 157, 0.2);
                    color: var(--brand-neon);
                    font-size: 0.75rem;
                    font-weight: 700;
                    animation: float 3s ease-in-out infinite;
                }
                .badge-ping {
                    position: relative;
                    display: flex;
                    width: 0.5rem;
                    height: 0.5rem;
                }
                .badge-ping .ping,
                .badge-ping .dot {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: var(--brand-neon);
                }
                .badge-ping .ping {
                    opacity: 0.75;
                    animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                }
                .hero h1 {
                    font-size: 3rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }
                .hero-subtitle {
                    color: var(--muted);
                    font-size: 1.125rem;
                    line-height: 1.6;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                }
                .hero-ctas {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .hero-ctas button {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    font-family: inherit;
                    font-size: 1.125rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .cta-primary {
                    background: var(--brand-neon);
                    color: #000;
                    border: none;
                }
                .cta-primary:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 30px rgba(0, 255, 157, 0.5);
                }
                .cta-secondary {
                    color: #fff;
                }
                .cta-secondary:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .icon.youtube {
                    color: #ef4444;
                }

                /* Dashboard mock */
                .dashboard-preview {
                    position: relative;
                    max-width: 64rem;
                    margin: 6rem auto 0;
                    text-align: left;
                    scroll-margin-top: 6rem;
                }
                .dashboard-glow {
                    position: absolute;
                    inset: -1rem;
                    background: linear-gradient(to right, rgba(0, 255, 157, 0.2), rgba(139, 92, 246, 0.2));
                    filter: blur(64px);
                    opacity: 0.3;
                }
                .dashboard-window {
                    position: relative;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .dashboard-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .window-controls,
                .window-toolbar {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .window-toolbar {
                    gap: 1rem;
                }
                .dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                }
                .dot.red { background: rgba(239, 68, 68, 0.5); }
                .dot.yellow { background: rgba(234, 179, 8, 0.5); }
                .dot.green { background: rgba(34, 197, 94, 0.5); }
                .window-title {
                    margin-left: 1rem;
                    font-family: "JetBrains Mono", monospace;
                    font-size: 0.75rem;
                    color: var(--faint);
                }
                .skeleton {
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                }
                .skeleton.pill {
                    width: 6rem;
                    height: 1.5rem;
                }
                .skeleton.avatar {
                    width: 2rem;
                    height: 2rem;
                    background: rgba(0, 255, 157, 0.2);
                }
                .dashboard-body {
                    display: grid;
                    grid-template-columns: 1fr;
                    height: 500px;
                }
                .dashboard-sidebar {
                    display: none;
                    padding: 1rem;
                    border-right: 1px solid rgba(255, 255, 255, 0.1);
                }
                .sidebar-row {
                    height: 2rem;
                    border-radius: 0.5rem;
                    margin-bottom: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                }
                .sidebar-row.active {
                    background: rgba(0, 255, 157, 0.1);
                }
                .dashboard-main {
                    padding: 1.5rem;
                    overflow-y: auto;
                }
                .dashboard-main-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 2rem;
                }
                .dashboard-main-header h4 {
                    margin: 0;
                    font-size: 1.125rem;
                    font-weight: 600;
                }
                .new-automation {
                    background: var(--brand-neon);
                    color: #000;
                    border: none;
                    padding: 0.375rem 1rem;
                    border-radius: 0.5rem;
                    font-family: inherit;
                    font-size: 0.875rem;
                    font-weight: 700;
                }
                .project-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                }
                .project-thumb {
                    position: relative;
                    width: 6rem;
                    height: 3.5rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    color: rgba(255, 255, 255, 0.5);
                }
                .project-thumb .icon {
                    width: 1rem;
                    height: 1rem;
                }
                .project-progress {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    height: 0.25rem;
                    width: 66%;
                    background: var(--brand-neon);
                }
                .project-info {
                    flex: 1;
                }
                .project-title {
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .project-meta {
                    font-size: 0.75rem;
                    color: var(--faint);
                }
                .project-status {
                    text-align: right;
                }
                .status-label {
                    font-family: "JetBrains Mono", monospace;
                    font-size: 0.75rem;
                    color: var(--brand-neon);
                }
                .status-detail {
                    font-size: 10px;
                    color: var(--faint);
                }
                .clips-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .clip-tile {
                    border-radius: 0.5rem;
                    overflow: hidden;
                    cursor: pointer;
                }
                .clip-frame {
                    position: relative;
                    aspect-ratio: 9 / 16;
                    background: rgba(255, 255, 255, 0.05);
                }
                .clip-play {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.4);
                    color: var(--brand-neon);
                    opacity: 0;
                    transition: opacity 0.2s ease;
                }
                .clip-tile:hover .clip-play {
                    opacity: 1;
                }
                .clip-play .icon {
                    width: 2rem;
                    height: 2rem;
                }
                .clip-length {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    padding: 0.125rem 0.375rem;
                    border-radius: 0.25rem;
                    background: rgba(0, 0, 0, 0.6);
                    font-family: "JetBrains Mono", monospace;
                    font-size: 10px;
                }
                .clip-footer {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 10px;
                }
                .clip-name {
                    color: var(--muted);
                }
                .clip-scheduled {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    color: var(--brand-neon);
                }
                .clip-scheduled .icon {
                    width: 0.75rem;
                    height: 0.75rem;
                }

                /* Features */
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .section-heading p {
                    color: var(--muted);
                }
                #features,
                #pricing {
                    scroll-margin-top: 6rem;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }
                .feature-card {
                    padding: 2rem;
                    border-radius: 1rem;
                    cursor: pointer;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .feature-card:hover {
                    transform: translateY(-5px) scale(1.02);
                    border-color: rgba(0, 255, 157, 0.5);
                }
                .feature-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    background: rgba(0, 255, 157, 0.1);
                    color: var(--brand-neon);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                    transition: background 0.2s ease;
                }
                .feature-card:hover .feature-icon {
                    background: rgba(0, 255, 157, 0.2);
                }
                .feature-icon .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }
                .feature-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.75rem;
                }
                .feature-card p {
                    color: var(--muted);
                    line-height: 1.6;
                    margin: 0;
                }

                /* Pricing */
                .pricing-panel {
                    position: relative;
                    overflow: hidden;
                    border-radius: 32px;
                    padding: 3rem;
                }
                .pricing-glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 50%;
                    background: rgba(0, 255, 157, 0.1);
                    filter: blur(100px);
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .pricing-copy h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }
                .pricing-copy p {
                    color: var(--muted);
                    font-size: 1.125rem;
                    margin: 0 0 2rem;
                }
                .pricing-bullets {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .pricing-bullets li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #d1d5db;
                }
                .bullet-check {
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 50%;
                    background: rgba(0, 255, 157, 0.2);
                    color: var(--brand-neon);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .bullet-check .icon {
                    width: 0.75rem;
                    height: 0.75rem;
                }
                .plan-card {
                    position: relative;
                    padding: 2rem;
                    border-radius: 1rem;
                    border-color: rgba(0, 255, 157, 0.3);
                    text-align: center;
                }
                .plan-badge {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: var(--brand-neon);
                    color: #000;
                    padding: 0.25rem 1rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    white-space: nowrap;
                }
                .plan-name {
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: var(--brand-neon);
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .plan-price {
                    font-size: 3.75rem;
                    font-weight: 700;
                    margin: 1rem 0;
                }
                .plan-note {
                    color: var(--muted);
                    margin: 0 0 2rem;
                }
                .plan-cta {
                    width: 100%;
                    background: #fff;
                    color: #000;
                    border: none;
                    padding: 1rem 0;
                    border-radius: 0.75rem;
                    font-family: inherit;
                    font-size: 1.125rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .plan-cta:hover {
                    background: var(--brand-neon);
                }
                .plan-fine-print {
                    font-size: 10px;
                    color: var(--faint);
                    margin: 1rem 0 0;
                }

                /* Stats */
                .section.stats {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    text-align: center;
                }
                .stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .stat-label {
                    font-size: 0.75rem;
                    color: var(--faint);
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-weight: 700;
                }

                /* Footer */
                .landing-footer {
                    position: relative;
                    z-index: 1;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 5rem 1.5rem 2.5rem;
                }
                .footer-grid,
                .footer-bottom {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    margin-bottom: 4rem;
                }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .icon.logo-bolt.neon {
                    color: var(--brand-neon);
                    fill: var(--brand-neon);
                    width: 1.5rem;
                    height: 1.5rem;
                }
                .footer-brand p {
                    color: var(--faint);
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin: 0 0 1.5rem;
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                }
                .social-icon {
                    color: var(--muted);
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .social-icon:hover {
                    color: var(--brand-neon);
                }
                .footer-column h5 {
                    font-size: 1rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }
                .footer-column ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: var(--faint);
                }
                .footer-column li {
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .footer-column li:hover {
                    color: var(--brand-neon);
                }
                .footer-bottom {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    font-size: 0.75rem;
                    color: #4b5563;
                }
                .footer-bottom p {
                    margin: 0;
                }
                .footer-meta {
                    display: flex;
                    gap: 1.5rem;
                    margin-top: 1rem;
                }

                @media (min-width: 640px) {
                    .nav-login {
                        display: block;
                    }
                    .hero-ctas {
                        flex-direction: row;
                    }
                    .hero-ctas button {
                        width: auto;
                    }
                }

                @media (min-width: 768px) {
                    .nav-links {
                        display: flex;
                    }
                    .burger-menu,
                    .mobile-menu {
                        display: none;
                    }
                    .hero h1 {
                        font-size: 4.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                    }
                    .dashboard-body {
                        grid-template-columns: 3fr 9fr;
                    }
                    .dashboard-sidebar {
                        display: block;
                    }
                    .features-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .section-heading h2 {
                        font-size: 3rem;
                    }
                    .pricing-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                    .pricing-copy h2 {
                        font-size: 3rem;
                    }
                    .section.stats {
                        grid-template-columns: repeat(4, 1fr);
                    }
                    .stat-value {
                        font-size: 2.25rem;
                    }
                    .footer-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                    .footer-bottom {
                        flex-direction: row;
                    }
                    .footer-meta {
                        margin-top: 0;
                    }
                }

                @media (min-width: 1024px) {
                    .features-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
