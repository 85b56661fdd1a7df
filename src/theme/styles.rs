//! Global CSS styles for the archive site.
//!
//! Classified-file aesthetic: near-black paper, olive drab, blood red for
//! the critical year.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --paper-black: #0d0d0b;
  --paper-dark: #151512;
  --paper-border: #2a2a24;

  /* Military */
  --olive: #4b5320;
  --olive-light: #6b7540;
  --khaki: #c3b091;

  /* Accent */
  --blood-red: #8a0303;
  --blood-glow: rgba(138, 3, 3, 0.35);
  --signal-green: #5c9e5c;

  /* Text */
  --text-primary: #e8e4d8;
  --text-secondary: rgba(232, 228, 216, 0.7);
  --text-muted: rgba(232, 228, 216, 0.45);

  /* Typography */
  --font-serif: 'Noto Serif SC', 'Songti SC', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-view: 300ms ease;
  --transition-fade: 800ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--paper-black);
  color: var(--text-primary);
  font-family: var(--font-serif);
  line-height: 1.7;
  min-height: 100vh;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

img {
  display: block;
  max-width: 100%;
}

/* === Loader === */
.loader {
  position: fixed;
  inset: 0;
  z-index: 9000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--paper-black);
  opacity: 1;
  transition: opacity var(--transition-fade);
}

.loader.fading {
  opacity: 0;
}

.loader-inner {
  width: min(420px, 86vw);
  font-family: var(--font-mono);
}

.loader-label {
  color: var(--text-muted);
  font-size: 0.75rem;
  letter-spacing: 0.2em;
}

.year-counter {
  font-size: 4rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  transition: color var(--transition-fast);
}

.year-counter.highlight {
  color: var(--blood-red);
  text-shadow: 0 0 18px var(--blood-glow);
}

.progress-track {
  height: 2px;
  background: var(--paper-border);
  margin: 1rem 0;
}

.progress-bar {
  height: 100%;
  background: var(--khaki);
  transition: width 80ms linear;
}

.loader-meta {
  display: flex;
  justify-content: space-between;
  font-size: 0.8rem;
  color: var(--text-secondary);
}

.status-text.error {
  color: var(--blood-red);
}

.status-text.success {
  color: var(--signal-green);
}

/* === Main Content === */
.main-content {
  opacity: 0;
  transition: opacity var(--transition-fade);
}

.main-content.visible {
  opacity: 1;
}

/* === Navigation Header === */
.nav-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.75rem 2rem;
  background: rgba(13, 13, 11, 0.92);
  border-bottom: 1px solid var(--paper-border);
  transform: translateY(-100%);
  transition: transform var(--transition-view);
}

.nav-header.visible {
  transform: translateY(0);
}

.nav-title {
  font-size: 1.1rem;
  letter-spacing: 0.15em;
}

.nav-subtitle {
  margin-left: 0.5rem;
  font-family: var(--font-mono);
  font-size: 0.7rem;
  color: var(--text-muted);
}

.nav-links {
  display: flex;
  gap: 1.25rem;
}

.nav-link {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--khaki);
}

.nav-key {
  margin-right: 0.35rem;
  font-family: var(--font-mono);
  font-size: 0.7rem;
  color: var(--text-muted);
}

/* === Landing Menu === */
.landing-menu {
  min-height: 140vh;
  padding: 18vh 2rem 4rem;
  text-align: center;
  transition: opacity var(--transition-view);
}

.landing-menu.hidden {
  opacity: 0;
  pointer-events: none;
  position: absolute;
  visibility: hidden;
}

.hero-label {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.25em;
  color: var(--text-muted);
}

.hero-title {
  font-size: clamp(2.5rem, 8vw, 5rem);
  letter-spacing: 0.3em;
}

.hero-tagline {
  color: var(--text-secondary);
}

.menu-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 1rem;
  max-width: 960px;
  margin: 4rem auto 0;
}

.menu-card {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1.5rem;
  text-align: left;
  border: 1px solid var(--paper-border);
  background: var(--paper-dark);
  transition: border-color var(--transition-fast);
}

.menu-card:hover {
  border-color: var(--olive-light);
}

.menu-number {
  font-family: var(--font-mono);
  color: var(--text-muted);
}

.menu-title {
  font-size: 1.25rem;
}

.menu-blurb {
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.scroll-hint {
  margin-top: 4rem;
  font-size: 0.85rem;
  color: var(--text-muted);
}

/* === Views === */
.view {
  display: none;
  max-width: 1100px;
  margin: 0 auto;
  padding: 6rem 2rem 4rem;
  animation: viewIn var(--transition-view);
}

.view.active {
  display: block;
}

.view-header {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  flex-wrap: wrap;
  gap: 1rem;
  margin-bottom: 2rem;
  border-bottom: 1px solid var(--paper-border);
  padding-bottom: 1rem;
}

.view-title {
  font-size: 1.75rem;
  letter-spacing: 0.2em;
}

@keyframes viewIn {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Scroll Animations === */
.animate-on-scroll {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.animate-on-scroll.visible {
  opacity: 1;
  transform: translateY(0);
}

/* === Timeline === */
.reveal-all-btn {
  padding: 0.4rem 1rem;
  border: 1px solid var(--paper-border);
  color: var(--text-secondary);
}

.reveal-all-btn.active {
  border-color: var(--khaki);
  color: var(--khaki);
}

.btn-key {
  margin-left: 0.5rem;
  font-family: var(--font-mono);
  font-size: 0.7rem;
  color: var(--text-muted);
}

.timeline-wrapper {
  position: relative;
  padding-left: 6rem;
}

.timeline-wrapper::before {
  content: '';
  position: absolute;
  left: 4.5rem;
  top: 0;
  bottom: 0;
  width: 1px;
  background: var(--paper-border);
}

.timeline-entry {
  position: relative;
  min-height: 5rem;
}

.year-marker {
  position: absolute;
  left: -6rem;
  width: 4rem;
  text-align: right;
  font-family: var(--font-mono);
  color: var(--text-muted);
}

.story-node {
  position: relative;
  padding: 0.25rem 0 1.5rem 1.5rem;
  cursor: default;
}

.node-dot {
  position: absolute;
  left: -1.8rem;
  top: 0.7rem;
  width: 9px;
  height: 9px;
  border-radius: 50%;
  background: var(--olive-light);
}

.node-title {
  font-size: 1.1rem;
}

.node-card {
  max-height: 0;
  overflow: hidden;
  opacity: 0;
  margin-top: 0.5rem;
  padding: 0 1rem;
  border-left: 2px solid var(--khaki);
  background: var(--paper-dark);
  transition: opacity var(--transition-view), max-height var(--transition-view);
}

.story-node.hover-active .node-card,
.timeline-wrapper.reveal-all .node-card {
  max-height: 20rem;
  opacity: 1;
  padding: 0.75rem 1rem;
}

.card-year {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-muted);
}

.card-summary {
  color: var(--text-secondary);
}

/* === Profiles === */
.profile-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: 2rem;
}

.profile-card {
  border: 1px solid var(--paper-border);
  background: var(--paper-dark);
}

.profile-photo {
  position: relative;
}

.file-no {
  position: absolute;
  left: 0.75rem;
  bottom: 0.75rem;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  background: rgba(0, 0, 0, 0.6);
  padding: 0.1rem 0.5rem;
}

.profile-body {
  padding: 1.25rem;
}

.profile-born {
  color: var(--text-muted);
  font-family: var(--font-mono);
}

.profile-facts {
  display: grid;
  grid-template-columns: auto 1fr;
  gap: 0.25rem 1rem;
  margin: 1rem 0;
}

.profile-facts dt {
  color: var(--text-muted);
}

.costume-buttons {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.5rem;
}

.costume-label {
  color: var(--text-muted);
  font-size: 0.85rem;
}

.costume-btn {
  padding: 0.25rem 0.75rem;
  border: 1px solid var(--olive);
}

.costume-btn:hover {
  background: var(--olive);
}

/* === Gallery === */
.gallery-filters {
  display: flex;
  gap: 0.5rem;
}

.filter-btn {
  padding: 0.25rem 0.9rem;
  border: 1px solid var(--paper-border);
  color: var(--text-secondary);
}

.filter-btn.active {
  border-color: var(--khaki);
  color: var(--khaki);
}

.featured-gallery {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: 1rem;
  margin-bottom: 2rem;
}

.featured-item,
.gallery-item {
  position: relative;
  overflow: hidden;
  cursor: zoom-in;
  background: var(--paper-dark);
  animation: fadeIn 0.3s ease;
}

.featured-overlay,
.gallery-item-overlay {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 0.75rem;
  background: linear-gradient(transparent, rgba(0, 0, 0, 0.8));
}

.featured-desc {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-muted);
}

.gallery-grid {
  columns: 4 220px;
  column-gap: 1rem;
}

.gallery-grid .gallery-item {
  break-inside: avoid;
  margin-bottom: 1rem;
}

.gallery-item-overlay {
  opacity: 0;
  transition: opacity var(--transition-fast);
}

.gallery-item:hover .gallery-item-overlay {
  opacity: 1;
}

.gallery-loading {
  color: var(--text-muted);
  font-family: var(--font-mono);
}

@keyframes fadeIn {
  from { opacity: 0; transform: scale(0.95); }
  to { opacity: 1; transform: scale(1); }
}

/* === Image Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 2000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.92);
}

#modal-img {
  max-width: 86vw;
  max-height: 86vh;
  object-fit: contain;
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1.5rem;
  font-size: 2rem;
}

.modal-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  font-size: 3rem;
  padding: 1rem;
  color: var(--text-secondary);
}

.modal-nav.prev { left: 1rem; }
.modal-nav.next { right: 1rem; }

.modal-caption {
  position: absolute;
  bottom: 1.5rem;
  display: flex;
  gap: 1rem;
  color: var(--text-secondary);
}

.modal-counter {
  font-family: var(--font-mono);
  color: var(--text-muted);
}

/* === Costume Modal === */
.costume-modal {
  position: fixed;
  inset: 0;
  z-index: 1500;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.8);
}

.costume-content {
  position: relative;
  width: min(720px, 92vw);
  max-height: 86vh;
  overflow-y: auto;
  padding: 2rem;
  border: 1px solid var(--paper-border);
  background: var(--paper-dark);
}

.costume-close {
  position: absolute;
  top: 0.75rem;
  right: 1rem;
  font-size: 1.5rem;
}

.costume-desc {
  margin: 0.75rem 0 1.25rem;
  color: var(--text-secondary);
}

.costume-gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
  gap: 0.75rem;
}

.costume-img-item {
  cursor: zoom-in;
}

/* === Guestbook === */
.message-count strong {
  color: var(--khaki);
}

.messages-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-bottom: 2rem;
}

.message-item {
  display: flex;
  gap: 1rem;
  padding: 1rem;
  border: 1px solid var(--paper-border);
  background: var(--paper-dark);
}

.message-item.preset {
  border-left: 3px solid var(--blood-red);
}

.message-avatar {
  flex: none;
  width: 2.5rem;
  height: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--olive);
}

.message-avatar.gc {
  background: var(--blood-red);
}

.message-body {
  flex: 1;
  min-width: 0;
}

.message-meta {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
}

.message-time {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-muted);
}

.message-text {
  margin: 0.35rem 0;
  white-space: pre-wrap;
  overflow-wrap: anywhere;
}

.message-tag {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.message-form {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.input {
  width: 100%;
  padding: 0.75rem;
  font: inherit;
  color: var(--text-primary);
  background: var(--paper-dark);
  border: 1px solid var(--paper-border);
}

.input:focus {
  outline: none;
  border-color: var(--khaki);
}

.form-footer {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.char-count {
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--text-muted);
}

.char-count.over {
  color: var(--blood-red);
}

.btn-submit {
  padding: 0.5rem 1.75rem;
  background: var(--olive);
  transition: background var(--transition-fast);
}

.btn-submit:hover {
  background: var(--olive-light);
}

/* === Toast === */
.toast-message {
  position: fixed;
  bottom: 30px;
  left: 50%;
  transform: translateX(-50%);
  z-index: 10000;
  padding: 12px 25px;
  border-radius: 4px;
  font-size: 0.9rem;
  color: #fff;
  background: var(--blood-red);
  animation: toastIn 0.3s ease, toastOut 0.3s ease 2s forwards;
}

@keyframes toastIn {
  from { opacity: 0; transform: translateX(-50%) translateY(20px); }
  to { opacity: 1; transform: translateX(-50%) translateY(0); }
}

@keyframes toastOut {
  from { opacity: 1; transform: translateX(-50%) translateY(0); }
  to { opacity: 0; transform: translateX(-50%) translateY(-20px); }
}

/* === Responsive Layout === */
@media (max-width: 720px) {
  .nav-header {
    padding: 0.5rem 1rem;
    flex-direction: column;
    gap: 0.25rem;
  }

  .featured-gallery {
    grid-template-columns: 1fr;
  }

  .timeline-wrapper {
    padding-left: 4.5rem;
  }

  .timeline-wrapper::before {
    left: 3rem;
  }

  .year-marker {
    left: -4.5rem;
    width: 3rem;
    font-size: 0.8rem;
  }
}

/* === Accessibility === */
@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    transition-duration: 0.01ms !important;
  }
}
"#;
