use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide classes. Sections pick between `reveal` and `reveal revealed`
/// (plus a direction modifier) from their reveal flags.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={stylist::css!(r#"
            html { scroll-behavior: smooth; }
            body {
                margin: 0;
                font-family: "Hiragino Sans", "Noto Sans JP", sans-serif;
                color: #1f2937;
                background: #ffffff;
                overflow-x: hidden;
            }
            .container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
            .anchor { scroll-margin-top: 5rem; }
            .accent { color: #2563eb; }

            .reveal {
                opacity: 0;
                transition: opacity 1s ease, transform 1s ease;
            }
            .reveal.from-below { transform: translateY(5rem); }
            .reveal.from-left { transform: translateX(-5rem); }
            .reveal.revealed { opacity: 1; transform: none; }
            .reveal-zoom {
                opacity: 0;
                transform: scale(0.95);
                transition: opacity 1s ease, transform 1s ease;
            }
            .reveal-zoom.revealed { opacity: 1; transform: scale(1); }

            @keyframes fadeInUp {
                from { opacity: 0; transform: translateY(30px); }
                to { opacity: 1; transform: translateY(0); }
            }
            @keyframes bounceSlow {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-10px); }
            }
            @keyframes pulse {
                0%, 100% { opacity: 1; }
                50% { opacity: 0.5; }
            }
            @keyframes pop {
                0% { opacity: 0; transform: translateY(50px) scale(0.7); }
                70% { opacity: 1; transform: translateY(-6px) scale(1.04); }
                100% { opacity: 1; transform: translateY(0) scale(1); }
            }
            @keyframes dotBounce {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-12px); }
            }
            .animate-fade-in-up { animation: fadeInUp 0.8s ease-out forwards; }
            .animate-bounce-slow { animation: bounceSlow 2s infinite ease-in-out; animation-delay: 0.5s; }
            .animate-pulse { animation: pulse 2s infinite; }
            .animate-scale { transition: transform 0.3s ease; }
            .animate-scale:hover { transform: scale(1.05); }
            .animate-scale:active { transform: scale(0.95); }

            .cta-button {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                font-weight: 600;
                border-radius: 9999px;
                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                text-decoration: none;
                border: none;
                cursor: pointer;
                transition: all 0.3s ease;
            }
            .cta-button:active { transform: translateY(2px); box-shadow: none; }
            .cta-sm { padding: 0.5rem 1rem; font-size: 0.875rem; }
            .cta-md { padding: 0.75rem 1.5rem; font-size: 1rem; }
            .cta-lg { padding: 1rem 2rem; font-size: 1.125rem; }
            .cta-xl { padding: 1.25rem 2.5rem; font-size: 1.25rem; }
            .cta-primary { background: #2563eb; color: #fff; border-bottom: 4px solid #1d4ed8; }
            .cta-secondary { background: #22c55e; color: #fff; border-bottom: 4px solid #15803d; }
            .cta-accent { background: #a855f7; color: #fff; border-bottom: 4px solid #7e22ce; }
            .cta-signup { background: #ef4444; color: #fff; border-bottom: 4px solid #b91c1c; }
            .cta-outline { background: transparent; color: #f97316; border: 2px solid #fb923c; }
            .cta-outline:hover { background: #fb923c; color: #fff; }
            .cta-ghost { background: transparent; color: #374151; box-shadow: none; }
            .cta-full { width: 100%; }

            .top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                padding: 0.5rem 0;
                background: rgba(17, 24, 39, 0.6);
                backdrop-filter: blur(4px);
                transition: all 0.3s ease;
            }
            .top-nav.scrolled { background: rgba(0, 0, 0, 0.7); padding: 0; }
            .nav-content {
                display: flex;
                align-items: center;
                justify-content: space-between;
                max-width: 72rem;
                margin: 0 auto;
                padding: 0.5rem 1rem;
            }
            .nav-desktop { display: flex; gap: 2rem; }
            .nav-link { color: #fff; text-decoration: none; }
            .nav-link:hover { color: #60a5fa; }
            .menu-toggle { display: none; background: none; border: none; cursor: pointer; }
            .menu-toggle span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
            .menu-overlay { position: fixed; inset: 0; z-index: 40; background: rgba(0, 0, 0, 0.5); }
            .mobile-menu {
                position: fixed;
                top: 0;
                right: 0;
                z-index: 50;
                width: 80%;
                max-width: 24rem;
                height: 100vh;
                background: #fff;
                transform: translateX(100%);
                transition: transform 0.3s ease-in-out;
                display: none;
            }
            .mobile-menu.open { transform: translateX(0); }
            .mobile-menu-header { display: flex; justify-content: flex-end; padding: 1rem; }
            .mobile-menu-close { font-size: 1.75rem; background: none; border: none; cursor: pointer; }
            .mobile-menu-nav { display: flex; flex-direction: column; align-items: center; gap: 1.25rem; }
            .mobile-nav-link { color: #374151; font-size: 1.125rem; font-weight: 500; text-decoration: none; }
            .mobile-menu-cta { padding-top: 1.5rem; width: 80%; }
            .mobile-menu-character { display: flex; justify-content: flex-end; width: 100%; }

            @media (max-width: 767px) {
                .nav-desktop, .nav-cta { display: none; }
                .menu-toggle { display: block; }
                .mobile-menu { display: block; }
            }

            .loading-screen {
                position: fixed;
                inset: 0;
                z-index: 60;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                background: #111827;
                transition: opacity 1s ease;
            }
            .loading-screen.fading { opacity: 0; pointer-events: none; }
            .loading-dots { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
            .loading-dot {
                width: 1rem;
                height: 1rem;
                border-radius: 9999px;
                background: #fff;
                animation: dotBounce 1s infinite;
            }
            .loading-text { color: #fff; font-size: 1.125rem; }

            .floating-signup {
                position: fixed;
                bottom: 2rem;
                left: 50%;
                z-index: 40;
                opacity: 0;
                transform: translate(-50%, 4rem);
                transition: all 0.5s ease;
            }
            .floating-signup.visible { opacity: 1; transform: translate(-50%, 0); }
            .floating-signup-link {
                display: inline-flex;
                gap: 0.5rem;
                padding: 1rem 2rem;
                border-radius: 9999px;
                background: #ef4444;
                color: #fff;
                font-weight: 600;
                text-decoration: none;
            }

            .hero { position: relative; min-height: 100vh; overflow: hidden; display: flex; align-items: center; }
            .hero-background {
                position: absolute;
                inset: 0;
                background: linear-gradient(180deg, #1e3a8a, #111827);
                z-index: -1;
            }
            .hero-content { margin: 0 auto; text-align: center; color: #fff; padding: 6rem 1rem 2rem; }
            .hero-logo { max-width: 90%; border-radius: 1rem; }
            .hero-heading { font-size: 2.5rem; font-weight: 700; }
            .hero-subtitle { font-size: 1.25rem; }
            .hero-scroll { color: #fff; font-size: 2rem; text-decoration: none; }

            .character-stage { position: relative; height: 24rem; overflow: hidden; }
            .character {
                position: absolute;
                width: 6rem;
                opacity: 0;
                transform: translateY(50px) scale(0.7) rotate(var(--rotate));
            }
            .character img { width: 100%; }
            .character.popped { animation: pop 0.6s ease-out forwards; }

            .section-title { font-size: 2.25rem; font-weight: 700; text-align: center; margin-bottom: 1rem; }
            .section-lead { font-size: 1.25rem; text-align: center; margin-bottom: 2rem; }
            .section-kicker { text-align: center; text-transform: uppercase; color: #4b5563; }
            .section-cta { text-align: center; margin: 4rem 0; }
            .card-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
            @media (min-width: 1024px) {
                .card-grid { grid-template-columns: repeat(4, 1fr); }
                .card-grid.two { grid-template-columns: repeat(2, 1fr); }
                .card-grid.three { grid-template-columns: repeat(3, 1fr); }
            }
            .feature-section, .token-section, .about-section, .web3money-section,
            .pricing-section, .faq-section, .project-section, .points-section {
                position: relative;
                padding: 5rem 1rem;
                overflow: hidden;
            }
            .about-section { background: linear-gradient(180deg, #e0e7ff, #fff); }
            .points-section { background: #111827; color: #fff; }
            .feature-card, .token-card, .about-card, .platform-card, .benefits-card, .plan-card, .points-step {
                background: #fff;
                color: #1f2937;
                border-radius: 0.75rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                padding: 2rem;
            }
            .about-card h3, .about-card p { text-align: center; }
            .about-card em { color: #4f46e5; font-weight: 700; }
            .about-intro p { font-size: 1.25rem; text-align: center; }
            .about-learn-more { text-align: center; margin-top: 2rem; }
            .jump-buttons { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-bottom: 3rem; }
            .jump-button {
                padding: 0.75rem 1.5rem;
                border-radius: 9999px;
                background: #1e3a8a;
                color: #fff;
                text-decoration: none;
            }
            .token-card img, .platform-card img, .media-frame img, .media-frame video { width: 100%; border-radius: 0.5rem; }
            .token-button, .form-button {
                display: inline-flex;
                padding: 0.75rem 1.5rem;
                border-radius: 9999px;
                background: #eab308;
                color: #fff;
                font-weight: 600;
                text-decoration: none;
            }
            .form-button { background: #16a34a; }
            .media-frame { display: flex; justify-content: center; margin-bottom: 3rem; }
            .benefit h4 { font-size: 1.25rem; margin-bottom: 0.5rem; }
            .plan-grid { display: grid; gap: 2rem; }
            @media (min-width: 768px) { .plan-grid { grid-template-columns: repeat(2, 1fr); } }
            .plan-area { display: flex; align-items: center; gap: 1rem; }
            .plan-row {
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 0.75rem 0;
                border-bottom: 1px solid #e5e7eb;
            }
            .plan-data, .plan-price { font-size: 2.25rem; font-weight: 700; }
            .plan-price.big { font-size: 3rem; font-weight: 900; }
            .plan-tax { color: #6b7280; font-size: 0.875rem; }
            .plan-notes { margin-top: 2rem; font-size: 0.875rem; color: #4b5563; }
            .faq-vertical {
                position: absolute;
                left: 0;
                top: 50%;
                transform: translate(-1.25rem, -50%) rotate(90deg);
                font-size: 3.75rem;
                font-weight: 700;
                opacity: 0.2;
                color: #d1d5db;
            }
            .faq-list { max-width: 48rem; margin: 0 auto; border-radius: 0.75rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
            .faq-item { border-bottom: 1px solid #e5e7eb; }
            .faq-question {
                display: flex;
                justify-content: space-between;
                width: 100%;
                padding: 1.25rem;
                background: #fff;
                border: none;
                font-size: 1rem;
                text-align: left;
                cursor: pointer;
            }
            .faq-answer { max-height: 0; overflow: hidden; padding: 0 1.25rem; transition: max-height 0.3s ease; }
            .faq-item.open .faq-answer { max-height: 40rem; padding-bottom: 1.25rem; }
            .project-links { display: flex; flex-direction: column; gap: 1rem; align-items: center; }
            .project-link {
                width: 100%;
                max-width: 32rem;
                padding: 1.25rem;
                border-radius: 0.75rem;
                text-align: center;
                color: #fff;
                font-size: 1.25rem;
                font-weight: 700;
                text-decoration: none;
            }
            .project-link.official { background: #2563eb; }
            .project-link.community { background: #f97316; }
            .project-link.contact { background: #16a34a; }
            .points-steps { display: grid; gap: 1.5rem; }
            .points-section a { color: #60a5fa; }

            .site-footer { padding: 3rem 1rem; text-align: center; background: #f9fafb; }
            .footer-partners { display: flex; justify-content: center; gap: 2rem; margin-bottom: 2rem; }
            .footer-partners img { height: 2.5rem; }
            .footer-portal { display: inline-block; margin-bottom: 1.5rem; color: #2563eb; font-weight: 600; }
            .footer-legal { display: flex; flex-wrap: wrap; justify-content: center; gap: 1.5rem; }
            .footer-legal a { color: #4b5563; font-size: 0.875rem; }
            .footer-divider { border-top: 1px solid #e5e7eb; margin: 1.5rem 0; }
            .footer-copyright { color: #6b7280; font-size: 0.875rem; }
        "#)} />
    }
}
