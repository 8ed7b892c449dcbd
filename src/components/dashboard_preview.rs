use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::content::{DEMO_CLIP_COUNT, DEMO_CLIP_LENGTH, DEMO_PROJECT, DEMO_SIDEBAR_ROWS};

/// Static picture of the product dashboard. Nothing in here is wired to data.
#[function_component(DashboardPreview)]
pub fn dashboard_preview() -> Html {
    html! {
        <div id="dashboard" class="dashboard-preview">
            <div class="dashboard-glow"></div>
            <div class="glass dashboard-window reveal">
                <div class="dashboard-header">
                    <div class="window-controls">
                        <span class="dot red"></span>
                        <span class="dot yellow"></span>
                        <span class="dot green"></span>
                        <span class="window-title">{"clipforge-dashboard-v1.0"}</span>
                    </div>
                    <div class="window-toolbar">
                        <div class="skeleton pill"></div>
                        <div class="skeleton avatar"></div>
                    </div>
                </div>

                <div class="dashboard-body">
                    <div class="dashboard-sidebar">
                        { for (1..=DEMO_SIDEBAR_ROWS).map(|row| html! {
                            <div key={row} class={classes!("sidebar-row", (row == 1).then(|| "active"))}></div>
                        }) }
                    </div>

                    <div class="dashboard-main">
                        <div class="dashboard-main-header">
                            <h4>{"Active Projects"}</h4>
                            <button type="button" class="new-automation">{"New Automation"}</button>
                        </div>

                        <div class="glass project-row">
                            <div class="project-thumb">
                                <IconSvg icon={Icon::Play} />
                                <div class="project-progress"></div>
                            </div>
                            <div class="project-info">
                                <div class="project-title">{DEMO_PROJECT.title}</div>
                                <div class="project-meta">{DEMO_PROJECT.meta}</div>
                            </div>
                            <div class="project-status">
                                <div class="status-label">{DEMO_PROJECT.status}</div>
                                <div class="status-detail">{DEMO_PROJECT.detail}</div>
                            </div>
                        </div>

                        <div class="clips-grid">
                            { for (1..=DEMO_CLIP_COUNT).map(|clip| html! {
                                <div key={clip} class="glass clip-tile">
                                    <div class="clip-frame">
                                        <div class="clip-play">
                                            <IconSvg icon={Icon::Play} />
                                        </div>
                                        <div class="clip-length">{DEMO_CLIP_LENGTH}</div>
                                    </div>
                                    <div class="clip-footer">
                                        <span class="clip-name">{format!("Clip #{}", clip)}</span>
                                        <span class="clip-scheduled">
                                            <IconSvg icon={Icon::CheckCircle} />
                                            {"Scheduled"}
                                        </span>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
