/// Brand colors and typography, emitted as CSS custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub font_family: &'static str,
}

impl Theme {
    pub const DEFAULT: Theme = Theme {
        primary: "#2563eb",
        secondary: "#7c3aed",
        font_family: "\"Inter\", \"Roboto\", \"Helvetica\", \"Arial\", sans-serif",
    };

    pub fn css_variables(&self) -> String {
        format!(
            ":root{{--primary:{};--secondary:{};--font:{};}}",
            self.primary, self.secondary, self.font_family
        )
    }

    /// Full stylesheet: variables followed by the static rules.
    pub fn stylesheet(&self) -> String {
        let mut css = self.css_variables();
        css.push_str(STYLESHEET);
        css
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const STYLESHEET: &str = r#"
*{box-sizing:border-box;margin:0;padding:0}
html{scroll-behavior:smooth}
body{font-family:var(--font);background:#f9fafb;color:#1f2937;line-height:1.5}
a{color:inherit;text-decoration:none}
.container{max-width:72rem;margin:0 auto;padding:2rem 1.5rem}
.navbar{position:fixed;top:0;left:0;right:0;z-index:50;height:4rem;background:rgba(255,255,255,.8);backdrop-filter:blur(4px);transition:all .3s}
.navbar.scrolled{background:rgba(255,255,255,.95);box-shadow:0 10px 15px -3px rgba(0,0,0,.1)}
.navbar-inner{max-width:80rem;margin:0 auto;height:100%;padding:0 1rem;display:flex;justify-content:space-between;align-items:center}
.brand{font-size:1.25rem;font-weight:700;color:#000}
.nav-links{display:flex;gap:2rem;align-items:center}
.nav-links a{color:#374151;font-weight:500}
.nav-links a:hover{color:#000}
.menu-toggle{display:none;font-size:1.5rem;color:#000}
.btn{display:inline-block;font-weight:600;padding:.5rem 1.5rem;border-radius:.5rem;text-align:center}
.btn-dark{background:#000;color:#fff}
.btn-light{background:#fff;color:#000}
.btn-outline{border:2px solid currentColor}
.btn-primary{background:var(--primary);color:#fff}
.drawer-backdrop{position:fixed;inset:0;background:rgba(0,0,0,.5);z-index:40}
.drawer{position:fixed;top:0;right:0;width:16rem;height:100%;background:#fff;z-index:50;padding:1rem}
.drawer a{display:block;padding:.75rem .5rem;color:#374151}
.nav-spacer{height:4rem}
.hero{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;background:#000;color:#fff;text-align:center;padding:2rem}
.hero h1{font-size:4.5rem}
.hero h2{color:#d1d5db;margin:1rem 0}
.hero p{color:#9ca3af;max-width:56rem;margin-bottom:2.5rem}
.stats{display:grid;grid-template-columns:repeat(auto-fit,minmax(8rem,1fr));gap:2rem;margin-top:4rem;width:100%;max-width:48rem}
.stat strong{display:block;font-size:1.875rem}
.section{padding:5rem 0}
.section-title{text-align:center;margin-bottom:3rem}
.section-title h2{font-size:2.5rem}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(18rem,1fr));gap:1.5rem}
.card{background:#fff;border-radius:.5rem;box-shadow:0 4px 6px -1px rgba(0,0,0,.1);padding:1.5rem}
.icon{font-size:2.25rem}
.bullets li{list-style:none;padding-left:1rem;position:relative}
.bullets li::before{content:"";position:absolute;left:0;top:.6em;width:.5rem;height:.5rem;border-radius:50%;background:#000}
.badge{display:inline-block;padding:.125rem .75rem;border-radius:9999px;font-size:.75rem;font-weight:500;background:#f3f4f6;color:#1f2937}
.badge-pomodoro{background:#dbeafe;color:#1e40af}
.badge-voice{background:#ede9fe;color:#5b21b6}
.badge-high,.badge-required{background:#fee2e2;color:#991b1b}
.badge-medium{background:#fef9c3;color:#854d0e}
.badge-low,.badge-permission{background:#dcfce7;color:#166534}
.code{background:#1f2937;color:#4ade80;padding:.75rem;border-radius:.5rem;font-family:monospace;font-size:.875rem;overflow-x:auto;white-space:pre}
.mono{font-family:monospace;color:var(--primary)}
.search{width:100%;padding:.75rem 1rem;border:1px solid #d1d5db;border-radius:.5rem}
.tabs{display:flex;flex-wrap:wrap;gap:.5rem;margin:1rem 0 2rem}
.tab{padding:.5rem 1rem;border-radius:.5rem;color:#4b5563}
.tab.active{background:#dbeafe;color:#1e40af;border:1px solid #93c5fd}
.empty{text-align:center;padding:3rem 0;color:#6b7280}
.faq{border:1px solid #e5e7eb;border-radius:.5rem;margin-bottom:.5rem;overflow:hidden}
.faq-question{display:flex;justify-content:space-between;padding:1rem;background:#f9fafb;font-weight:600}
.faq-answer{padding:1rem;background:#fff;border-top:1px solid #e5e7eb}
.steps li{margin:.5rem 0 .5rem 1.5rem}
.footer{background:#000;color:#fff;padding:3rem 0 1.5rem}
.footer p{color:#9ca3af}
.footer .stats{margin:2rem auto 0}
.not-found{text-align:center;padding:6rem 1.5rem}
.not-found h1{font-size:8rem;color:var(--primary)}
@media (max-width:768px){.nav-links{display:none}.menu-toggle{display:block}.hero h1{font-size:3rem}}
"#;
