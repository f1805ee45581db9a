//! Global stylesheet, injected once via `stylist::yew::Global`.
//!
//! Palette: near-black #181616, cream #FFFFDB, signal red #FF3831.
//! Fonts are loaded from index.html; CSS keyframes stand in for a
//! JS animation library.

pub const GLOBAL_CSS: &str = r#"
:root {
    --bg: #181616;
    --cream: #FFFFDB;
    --red: #FF3831;
    --font-body: 'Inter', sans-serif;
    --font-heading: 'Bodoni Moda', serif;
    --font-brand: 'Space Grotesk', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

html {
    scroll-behavior: smooth;
}

body {
    background-color: var(--bg);
    color: var(--cream);
    font-family: var(--font-body);
}

a {
    color: inherit;
    text-decoration: none;
}

.page {
    min-height: 100vh;
    background-color: var(--bg);
    color: var(--cream);
}

.italic {
    font-style: italic;
}

/* Entrance animations */

@keyframes fade-up {
    from {
        opacity: 0;
        transform: translateY(30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

.fade-up {
    opacity: 0;
    animation: fade-up 0.8s ease-out forwards;
}

.delay-0 { animation-delay: 0s; }
.delay-1 { animation-delay: 0.15s; }
.delay-2 { animation-delay: 0.3s; }
.delay-3 { animation-delay: 0.45s; }
.delay-4 { animation-delay: 0.6s; }

@keyframes rise-in {
    from {
        opacity: 0;
        transform: translateY(50px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

.rise-in {
    opacity: 0;
    animation: rise-in 0.8s ease-out 0.9s forwards;
}

/* Navbar */

.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 40px 40px;
    background-color: transparent;
    transition: opacity 0.4s ease-in-out, transform 0.4s ease-in-out;
}

.navbar-mobile {
    padding: 32px 20px;
}

.navbar-placeholder {
    position: static;
    padding: 20px 40px;
}

.navbar-shown {
    opacity: 1;
    transform: translateY(0);
    pointer-events: auto;
}

.navbar-hidden {
    opacity: 0;
    transform: translateY(-100px);
    pointer-events: none;
}

.brand {
    font-family: var(--font-brand);
    font-size: 28px;
    font-weight: 700;
    letter-spacing: 0.02em;
    color: var(--cream);
}

.brand-centered {
    font-size: 26px;
    position: absolute;
    left: 50%;
    transform: translateX(-50%);
}

.nav-links {
    display: flex;
    gap: 24px;
    font-size: 14px;
    letter-spacing: 0.01em;
}

.nav-links a {
    opacity: 0.7;
    transition: opacity 0.3s;
}

.nav-links a:hover {
    opacity: 1;
}

.nav-actions {
    display: flex;
    align-items: center;
    gap: 24px;
}

.nav-start-link {
    font-size: 14px;
    opacity: 0.7;
    text-decoration: underline;
    text-underline-offset: 4px;
    transition: opacity 0.3s;
}

.nav-start-link:hover {
    opacity: 1;
}

.mascot-badge {
    width: 54px;
    height: 54px;
    background: linear-gradient(135deg, #FF3831 0%, #E91E63 100%);
    border-radius: 14px;
    overflow: hidden;
    cursor: pointer;
    box-shadow: 0 8px 16px rgba(255, 56, 49, 0.2);
    border: 1px solid rgba(255, 255, 255, 0.1);
}

.mascot {
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
}

.mascot-badge-player {
    transform: scale(1.8) translateY(-6%);
}

/* CTA buttons with a sweep-on-hover fill */

.cta-button {
    position: relative;
    display: inline-block;
    padding: 14px 32px;
    font-family: var(--font-heading);
    font-size: 18px;
    font-weight: 500;
    letter-spacing: 0.05em;
    border-radius: 8px;
    overflow: hidden;
    cursor: pointer;
}

.cta-button::before {
    content: "";
    position: absolute;
    inset: 0;
    background-color: var(--cream);
    transform: translateX(-100%);
    transition: transform 0.4s cubic-bezier(0.19, 1, 0.22, 1);
}

.cta-button:hover::before {
    transform: translateX(0);
}

.cta-button span {
    position: relative;
    z-index: 1;
    display: block;
    color: var(--cream);
    transition: color 0.4s;
}

.cta-button:hover span {
    color: var(--red);
    font-style: italic;
}

.cta-outline {
    border: 1.5px solid rgba(255, 255, 219, 0.4);
}

.cta-filled {
    background-color: var(--red);
    border-radius: 0.5rem;
}

.cta-raised {
    border-radius: 6px;
    letter-spacing: 0.04em;
    box-shadow: 0 4px 20px rgba(255, 56, 49, 0.25);
}

/* Hero */

.hero {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    background-color: var(--bg);
    overflow: hidden;
}

.hero-desktop {
    justify-content: center;
    padding: 160px 40px 40px;
    overflow: visible;
}

.hero-mobile .hero-copy {
    text-align: center;
    padding: 160px 24px 0;
}

.hero-desktop .hero-copy {
    text-align: center;
    max-width: 1100px;
    margin: 0 auto 48px;
}

.hero-headline {
    font-family: var(--font-heading);
    font-size: clamp(48px, 8vw, 101.333px);
    line-height: 0.85;
    font-weight: 400;
    letter-spacing: -0.02em;
    color: var(--cream);
}

.hero-mobile .hero-headline {
    font-size: clamp(50px, 14vw, 82px);
    margin-bottom: 20px;
}

.hero-ribbon {
    margin-bottom: 28px;
    display: flex;
    justify-content: center;
}

.ribbon {
    display: inline-block;
    vertical-align: middle;
}

.hero-sub {
    font-family: var(--font-heading);
    font-size: clamp(22px, 2.5vw, 30px);
    line-height: 1.2;
    margin-bottom: 40px;
    max-width: 420px;
    color: rgba(255, 255, 219, 0.85);
}

.hero-mobile .hero-sub {
    font-size: clamp(24px, 6.5vw, 36px);
    line-height: 1.15;
    margin: 0 auto 32px;
    max-width: 400px;
    color: var(--cream);
}

.hero-cta-row {
    display: flex;
    align-items: center;
    gap: 24px;
}

.hero-mobile .hero-cta-row {
    gap: 16px;
    margin-bottom: 32px;
    padding: 0 4px;
}

.hero-mobile .cta-outline {
    padding: 14px 24px;
    letter-spacing: 0.03em;
    flex-shrink: 0;
    border-color: rgba(255, 255, 219, 0.5);
}

.hero-note {
    font-family: var(--font-body);
    font-size: 13px;
    opacity: 0.5;
    max-width: 200px;
    line-height: 1.5;
    color: var(--cream);
}

.hero-mobile .hero-note {
    line-height: 1.4;
    text-align: left;
}

.hero-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 60px;
    max-width: 1200px;
    margin: 0 auto;
    width: 100%;
    align-items: end;
}

/* Rotating word in the mobile sub-headline */

.word-rotate {
    position: relative;
    display: inline-block;
    height: 1.15em;
    vertical-align: top;
    overflow: hidden;
    width: 100%;
    text-align: center;
}

@keyframes word-in {
    from {
        opacity: 0;
        transform: translateY(20px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

.word-rotate-inner {
    position: absolute;
    left: 0;
    right: 0;
    text-align: center;
    display: block;
    font-style: italic;
    color: var(--red);
    animation: word-in 0.5s ease-in-out;
}

/* Stat bars (mobile) and floating stat cards (desktop) */

@keyframes shimmer {
    from { transform: translateX(-100%); }
    to { transform: translateX(200%); }
}

.stat-shimmer {
    position: absolute;
    inset: 0;
    background: linear-gradient(90deg, transparent 0%, rgba(255, 255, 255, 0.12) 50%, transparent 100%);
    pointer-events: none;
    animation: shimmer 3s linear infinite;
}

.stat {
    position: relative;
    overflow: hidden;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    color: var(--cream);
}

.stat-label {
    font-weight: 900;
    margin-bottom: 4px;
    position: relative;
    text-shadow: 0 2px 4px rgba(0, 0, 0, 0.2);
}

.stat-sub {
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    text-align: center;
    position: relative;
    text-shadow: 0 1px 2px rgba(0, 0, 0, 0.2);
}

.stat-text-dark {
    color: var(--bg);
    text-shadow: none;
}

.stat-gold { background: linear-gradient(160deg, #FFD700 0%, #FF8C00 100%); }
.stat-red { background: linear-gradient(160deg, #FF3831 0%, #E91E63 100%); }
.stat-cream { background: linear-gradient(160deg, #FFFFDB 0%, #E8E0C8 100%); }
.stat-green { background: linear-gradient(160deg, #34D399 0%, #059669 100%); }

.stat-bars {
    display: flex;
    gap: 8px;
    padding: 0 16px;
    margin-top: 16px;
}

.stat-bars .stat {
    flex: 1;
    border-radius: 14px 14px 0 0;
    padding: 8px;
    min-height: 120px;
    border: 1px solid rgba(255, 255, 219, 0.1);
    border-bottom: none;
}

.stat-bars .stat-0 { height: 18vh; }
.stat-bars .stat-1 { height: 22vh; }
.stat-bars .stat-2 { height: 20vh; border-color: rgba(0, 0, 0, 0.1); }
.stat-bars .stat-3 { height: 24vh; }

.stat-bars .stat-label {
    font-size: 18px;
    margin-bottom: 2px;
}

.stat-bars .stat-sub {
    font-size: 10px;
}

@keyframes float {
    0% { transform: translateY(0); }
    50% { transform: translateY(-10px); }
    100% { transform: translateY(0); }
}

.stat-cards {
    display: flex;
    gap: 16px;
    justify-content: flex-end;
    align-items: flex-end;
}

.stat-cards .stat {
    border-radius: 20px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    padding: 20px;
    animation: float 4s ease-in-out infinite;
}

.stat-cards .stat-0 {
    width: 160px;
    height: 280px;
    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.4);
}

.stat-cards .stat-1 {
    width: 170px;
    height: 320px;
    box-shadow: 0 25px 70px rgba(255, 56, 49, 0.2);
    animation-duration: 5s;
    animation-delay: 0.5s;
}

.stat-cards .stat-2 {
    width: 150px;
    height: 260px;
    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
    border-color: rgba(0, 0, 0, 0.1);
    animation-duration: 4.5s;
    animation-delay: 1s;
}

.stat-cards .stat-label {
    font-size: 32px;
}

.stat-cards .stat-sub {
    font-size: 16px;
    letter-spacing: 0.1em;
}

/* About */

.about {
    display: flex;
    flex-direction: column;
    align-items: center;
    background-color: var(--bg);
    padding: 0 40px 160px;
    text-align: center;
    overflow: hidden;
    margin-top: -40px;
}

.about-mobile {
    padding: 0 24px 100px;
    margin-top: -20px;
}

.about-placeholder {
    min-height: 100vh;
}

.about-content {
    max-width: 720px;
    display: flex;
    flex-direction: column;
    align-items: center;
}

.about-mascot {
    width: 240px;
    height: 240px;
    margin-bottom: 32px;
}

.about-mobile .about-mascot {
    width: 160px;
    height: 160px;
    margin-bottom: 24px;
}

.about-heading {
    font-family: var(--font-heading);
    font-size: clamp(64px, 7vw, 96px);
    line-height: 0.9;
    font-weight: 400;
    letter-spacing: -0.02em;
    color: var(--cream);
    margin-bottom: 40px;
}

.about-mobile .about-heading {
    font-size: clamp(48px, 14vw, 64px);
    line-height: 0.95;
    margin-bottom: 32px;
}

.about-ribbon {
    margin-bottom: 44px;
}

.about-mobile .about-ribbon {
    margin-bottom: 32px;
}

.about-body {
    font-family: var(--font-heading);
    font-size: clamp(26px, 2.5vw, 36px);
    line-height: 1.35;
    font-weight: 400;
    color: rgba(255, 255, 219, 0.9);
    max-width: 900px;
    margin-bottom: 60px;
}

.about-mobile .about-body {
    font-size: clamp(22px, 6vw, 28px);
    line-height: 1.3;
    margin-bottom: 44px;
    padding: 0 8px;
}

.about-mobile .cta-raised {
    font-size: 16px;
}

/* Footer */

.footer {
    padding: 60px 40px;
    background-color: var(--bg);
    border-top: 1px solid rgba(255, 255, 219, 0.08);
    display: flex;
    justify-content: center;
    align-items: center;
}

.footer-mobile {
    padding: 40px 24px;
}

.footer-mark {
    font-size: 12px;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    opacity: 0.35;
    color: var(--cream);
    font-family: var(--font-body);
}

.hero-placeholder {
    min-height: 100vh;
}
"#;
