//! Global CSS styles for EVO-A.
//!
//! Palette variables live on the shell variants so every surface below the
//! shell follows the active theme. Surface classes come in `--dark` and
//! `--light` pairs produced by `evoa_core::style`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Brand */
  --brand: #7c3aed;
  --brand-glow: rgba(124, 58, 237, 0.35);
  --accent: #f97316;
  --like: #ef4444;
  --story-ring: linear-gradient(45deg, #f97316, #ec4899, #7c3aed);

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Layout */
  --radius: 12px;
  --radius-pill: 999px;
  --navbar-height: 56px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
}

/* === Shell === */
.shell--dark {
  --bg: #000000;
  --bg-raised: #111111;
  --bg-input: #1c1c1e;
  --border: #262626;
  --text-primary: #f5f5f5;
  --text-muted: #a3a3a3;
  --overlay: rgba(0, 0, 0, 0.7);
  --shadow: rgba(0, 0, 0, 0.6);
}

.shell--light {
  --bg: #ffffff;
  --bg-raised: #fafafa;
  --bg-input: #f0f0f0;
  --border: #dbdbdb;
  --text-primary: #111111;
  --text-muted: #737373;
  --overlay: rgba(0, 0, 0, 0.45);
  --shadow: rgba(0, 0, 0, 0.12);
}

.shell {
  background: var(--bg);
  color: var(--text-primary);
  transition: background var(--transition-normal), color var(--transition-normal);
}

.shell--full {
  height: 100vh;
  overflow: hidden;
  display: flex;
  flex-direction: column;
}

.shell--min {
  min-height: 100vh;
}

.shell-content {
  max-width: 640px;
  margin: 0 auto;
  padding: calc(var(--navbar-height) + 1rem) 1rem 2rem;
}

.shell--full .shell-content {
  flex: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
}

/* === Text Surfaces === */
.text-primary--dark,
.text-primary--light {
  color: var(--text-primary);
}

.text-muted--dark,
.text-muted--light {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Navigation Bar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--navbar-height);
  z-index: 50;
  border-bottom: 1px solid var(--border);
  transition: box-shadow var(--transition-fast);
}

.navbar--dark {
  background: rgba(0, 0, 0, 0.92);
}

.navbar--light {
  background: rgba(255, 255, 255, 0.92);
}

.navbar--scrolled {
  box-shadow: 0 2px 12px var(--shadow);
}

.navbar-inner {
  height: 100%;
  max-width: 960px;
  margin: 0 auto;
  padding: 0 1rem;
  display: flex;
  align-items: center;
  gap: 1rem;
}

.navbar-brand {
  font-weight: 800;
  font-size: var(--text-lg);
  letter-spacing: 0.02em;
}

.brand-accent {
  color: var(--brand);
}

.nav-links {
  display: flex;
  gap: 0.25rem;
  flex: 1;
  justify-content: center;
}

.nav-link {
  padding: 0.375rem 0.75rem;
  border-radius: var(--radius-pill);
  font-size: var(--text-sm);
  color: var(--text-muted);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-link.active {
  color: var(--text-primary);
  background: var(--bg-input);
  font-weight: 600;
}

.navbar-actions {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  margin-left: auto;
}

.menu-button {
  display: none;
}

/* === Mobile Menu === */
.menu-backdrop {
  position: fixed;
  inset: 0;
  background: var(--overlay);
  z-index: 60;
}

.mobile-menu {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  width: min(280px, 80vw);
  z-index: 70;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  border-left: 1px solid var(--border);
  animation: slide-in var(--transition-normal);
}

.mobile-menu--dark {
  background: #0a0a0a;
}

.mobile-menu--light {
  background: #ffffff;
}

.mobile-menu-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.mobile-menu-links {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.mobile-menu-links .nav-link {
  font-size: var(--text-base);
  padding: 0.75rem;
  border-radius: var(--radius);
}

@keyframes slide-in {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.625rem 1.25rem;
  border-radius: var(--radius);
  border: 1px solid transparent;
  font-weight: 600;
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--brand);
  color: #ffffff;
}

.btn-primary:hover {
  box-shadow: 0 0 16px var(--brand-glow);
  transform: translateY(-1px);
}

.btn-secondary {
  background: var(--bg-input);
  border-color: var(--border);
}

.btn-secondary:hover {
  border-color: var(--text-muted);
}

.btn-ghost {
  background: transparent;
  color: var(--text-muted);
}

.btn-ghost:hover {
  color: var(--text-primary);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 36px;
  height: 36px;
  border-radius: 50%;
  border: none;
  background: transparent;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.icon-btn:hover {
  background: var(--bg-input);
}

.close-btn {
  font-size: var(--text-xl);
  line-height: 1;
}

.icon {
  flex-shrink: 0;
}

/* === Avatars === */
.avatar {
  border-radius: 50%;
  object-fit: cover;
  background: var(--bg-input);
  flex-shrink: 0;
}

.avatar--tiny { width: 20px; height: 20px; }
.avatar--sm { width: 32px; height: 32px; }
.avatar--md { width: 44px; height: 44px; }
.avatar--lg { width: 88px; height: 88px; }

.avatar--ring {
  padding: 2px;
  background: var(--story-ring);
}

.avatar-stack {
  display: flex;
}

.avatar-stack .avatar {
  border: 2px solid var(--bg);
  margin-left: -6px;
}

.avatar-stack .avatar:first-child {
  margin-left: 0;
}

/* === Status Strip === */
.status-strip {
  display: flex;
  gap: 1rem;
  overflow-x: auto;
  padding: 0.75rem 0.25rem;
  margin-bottom: 1rem;
  border-bottom: 1px solid var(--border);
  scrollbar-width: none;
}

.story {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.25rem;
  min-width: 64px;
}

.story-label {
  font-size: var(--text-xs);
  max-width: 64px;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

/* === Feed === */
.feed-title {
  font-size: var(--text-xl);
  font-weight: 800;
}

.feed-cards {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

/* === Pitch Card === */
.pitch-card {
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
}

.pitch-card--dark {
  background: #000000;
}

.pitch-card--light {
  background: #ffffff;
}

.pitch-card__header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem;
}

.pitch-card__author {
  display: flex;
  flex-direction: column;
  line-height: 1.25;
}

.pitch-card__name {
  font-weight: 600;
  font-size: var(--text-sm);
}

.pitch-card__tagline {
  font-size: var(--text-xs);
  color: var(--accent);
}

.pitch-card__media {
  background: var(--bg-input);
}

.pitch-media {
  display: block;
  width: 100%;
  aspect-ratio: 1 / 1;
  object-fit: cover;
}

.pitch-card__actions {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.5rem 0.5rem 0;
}

.action-btn {
  display: inline-flex;
  padding: 0.375rem;
  border: none;
  background: transparent;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.action-btn:active {
  transform: scale(0.9);
}

.action-btn.liked {
  color: var(--like);
}

.action-btn.saved {
  color: var(--brand);
}

.push-right {
  margin-left: auto;
}

.pitch-card__metrics {
  display: flex;
  gap: 1rem;
  padding: 0.25rem 0.75rem;
}

.metric {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
}

.pitch-card__caption {
  padding: 0.25rem 0.75rem;
  font-size: var(--text-sm);
}

.pitch-card__hashtags {
  padding: 0 0.75rem;
  font-size: var(--text-sm);
}

.hashtag {
  color: var(--brand);
}

.pitch-card__deal {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.5rem;
  margin: 0.75rem;
  padding: 0.75rem;
  border-radius: var(--radius);
  background: var(--bg-input);
}

.deal-cell {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.pitch-card__links {
  display: flex;
  gap: 0.5rem;
  padding: 0 0.75rem 0.5rem;
}

.pitch-link {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.25rem 0.75rem;
  border-radius: var(--radius-pill);
  border: 1px solid var(--border);
  font-size: var(--text-xs);
}

.pitch-link:hover {
  border-color: var(--brand);
}

.pitch-card__investors {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0 0.75rem 0.75rem;
}

/* === Inputs === */
.field {
  width: 100%;
  padding: 0.625rem 0.875rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-input);
  color: var(--text-primary);
  font: inherit;
  font-size: var(--text-sm);
  outline: none;
  transition: border-color var(--transition-fast);
}

.field:focus {
  border-color: var(--brand);
}

.field::placeholder {
  color: var(--text-muted);
}

.search-input-wrapper {
  position: relative;
  display: flex;
  align-items: center;
}

.search-icon {
  position: absolute;
  left: 0.75rem;
  color: var(--text-muted);
  pointer-events: none;
}

.search-input {
  padding-left: 2.25rem;
}

/* === Tabs === */
.tab-pills {
  display: flex;
  gap: 0.5rem;
  padding: 0 1rem;
}

.tab-pill {
  padding: 0.375rem 1rem;
  border-radius: var(--radius-pill);
  border: 1px solid var(--border);
  background: transparent;
  font-size: var(--text-sm);
  cursor: pointer;
}

.tab-pill.active {
  background: var(--text-primary);
  color: var(--bg);
  border-color: var(--text-primary);
}

/* === Modal & Popups === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: flex-end;
  justify-content: center;
  background: var(--overlay);
  animation: fade-in var(--transition-fast);
}

.popup {
  width: 100%;
  max-width: 480px;
  max-height: 80vh;
  display: flex;
  flex-direction: column;
  border-radius: var(--radius) var(--radius) 0 0;
  border: 1px solid var(--border);
  color: var(--text-primary);
  animation: slide-up var(--transition-normal);
}

.popup--dark {
  background: #121212;
}

.popup--light {
  background: #ffffff;
}

.popup--wide {
  max-width: 560px;
}

.popup-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1rem;
  border-bottom: 1px solid var(--border);
}

.popup-title {
  font-size: var(--text-base);
  font-weight: 700;
}

.popup-body {
  flex: 1;
  overflow-y: auto;
  padding: 0.75rem 0;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.popup-footer {
  padding: 0.75rem 1rem;
  border-top: 1px solid var(--border);
}

.popup-list {
  list-style: none;
  display: flex;
  flex-direction: column;
}

.popup-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem 1rem;
}

.popup-row__body {
  flex: 1;
  display: flex;
  flex-direction: column;
  min-width: 0;
}

.popup-row__actions {
  display: flex;
  gap: 0.5rem;
}

.popup-input-row {
  display: flex;
  gap: 0.5rem;
  align-items: center;
}

.popup-empty {
  padding: 2rem 1rem;
  text-align: center;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes slide-up {
  from { transform: translateY(40px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

/* === Investor Assistant === */
.assistant-fab {
  position: fixed;
  right: 1.25rem;
  bottom: 1.25rem;
  z-index: 90;
  width: 56px;
  height: 56px;
  border-radius: 50%;
  border: none;
  background: var(--brand);
  color: #ffffff;
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 4px 20px var(--brand-glow);
  cursor: pointer;
}

.assistant-panel {
  height: 70vh;
}

.assistant-messages {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 0 1rem;
}

.bubble {
  max-width: 80%;
  padding: 0.5rem 0.75rem;
  border-radius: 16px;
  font-size: var(--text-sm);
  display: flex;
  flex-direction: column;
}

.bubble--user {
  align-self: flex-end;
  background: var(--brand);
  color: #ffffff;
  border-bottom-right-radius: 4px;
}

.bubble--assistant {
  align-self: flex-start;
  background: var(--bg-input);
  border-bottom-left-radius: 4px;
}

.bubble-time {
  font-size: 0.625rem;
  opacity: 0.7;
  align-self: flex-end;
}

/* === Sections & Stats === */
.section {
  padding: 1.25rem 0;
}

.section--dark,
.section--light {
  border-bottom: 1px solid var(--border);
}

.section-title {
  font-size: var(--text-lg);
  font-weight: 700;
  margin-bottom: 0.75rem;
}

.stats-row {
  display: flex;
  justify-content: space-around;
  gap: 1rem;
}

.stat {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.stat--button {
  border: none;
  background: transparent;
  cursor: pointer;
}

.stat-value {
  font-size: var(--text-lg);
  font-weight: 700;
}

/* === Landing === */
.landing-hero {
  padding: 3rem 0 2rem;
  text-align: center;
}

.hero-title {
  font-size: var(--text-3xl);
  font-weight: 800;
  line-height: 1.1;
}

.hero-title .accent {
  color: var(--brand);
}

.hero-subtitle {
  max-width: 32rem;
  margin: 1rem auto 0;
  font-size: var(--text-base);
}

.hero-actions {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.feature-grid,
.role-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 1rem;
}

.feature,
.role-card {
  padding: 1rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-raised);
}

.landing-cta {
  padding: 2rem 0;
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

/* === Login === */
.login {
  width: 100%;
  max-width: 420px;
}

.login-panel {
  padding: 2rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.login-title {
  font-size: var(--text-xl);
  font-weight: 800;
}

.role-picker {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.role-option {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  text-align: left;
  padding: 0.875rem 1rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-input);
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.role-option:hover {
  border-color: var(--brand);
}

/* === Profile === */
.profile-hero {
  display: flex;
  align-items: center;
  gap: 1.25rem;
}

.profile-identity {
  display: flex;
  flex-direction: column;
  gap: 0.125rem;
}

.profile-name {
  font-size: var(--text-xl);
  font-weight: 800;
}

.profile-tagline {
  color: var(--accent);
  font-size: var(--text-sm);
}

.profile-actions {
  display: flex;
  justify-content: center;
  margin-top: 1rem;
}

.profile-pitches {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding-top: 1.25rem;
}

/* === Privacy & Not Found === */
.policy h1 {
  font-size: var(--text-xl);
  font-weight: 800;
  margin-bottom: 1rem;
}

.policy-section {
  margin-bottom: 1.25rem;
}

.policy-section h2 {
  font-size: var(--text-base);
  font-weight: 700;
  margin-bottom: 0.375rem;
}

.not-found {
  padding: 4rem 0;
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

/* === Responsive === */
@media (max-width: 720px) {
  .nav-links {
    display: none;
  }

  .menu-button {
    display: inline-flex;
  }

  .hero-title {
    font-size: var(--text-2xl);
  }

  .pitch-card__deal {
    grid-template-columns: 1fr;
  }
}
"#;
