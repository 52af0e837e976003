//! Global CSS styles for the Keanuverse portal.
//!
//! Dark cinematic aesthetic: near-black surfaces, silver body text, a
//! subtle blue accent, and role-colored badges in the gallery.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Brand surfaces */
  --brand-black: #0a0a0a;
  --brand-dark: #121212;
  --brand-gray: #1e1e1e;
  --brand-light-gray: #2a2a2a;

  /* Text */
  --brand-white: #f5f5f5;
  --brand-silver: #a0a0a0;

  /* Accent */
  --brand-accent: #3d7dff;
  --accent-glow: rgba(61, 125, 255, 0.3);

  /* Role accents */
  --matrix-green: #00ff41;
  --john-wick-gold: #d4af37;
  --neo-red: #dc3545;

  /* Card gold */
  --card-gold-light: #fde047;
  --card-gold: #eab308;
  --card-amber: #d97706;

  /* Semantic */
  --danger: #ef4444;

  /* Typography */
  --font-heading: 'Montserrat', 'Segoe UI', sans-serif;
  --font-body: 'Inter', 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 2rem;
  --text-4xl: 2.5rem;

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
  font-family: var(--font-body);
  background: var(--brand-black);
  color: var(--brand-white);
  line-height: 1.6;
  min-height: 100vh;
}

button {
  font-family: inherit;
  cursor: pointer;
  border: none;
  background: none;
  color: inherit;
}

button:disabled {
  cursor: not-allowed;
}

input, select, textarea {
  font-family: inherit;
  font-size: var(--text-base);
}

img {
  max-width: 100%;
  display: block;
}

/* === Typography === */
.page-title {
  font-family: var(--font-heading);
  font-size: var(--text-4xl);
  font-weight: 700;
  color: var(--brand-white);
  margin-bottom: 1rem;
}

.page-subtitle {
  font-size: var(--text-lg);
  color: var(--brand-silver);
  max-width: 48rem;
  margin: 0 auto;
}

.section-header {
  font-family: var(--font-heading);
  font-size: var(--text-3xl);
  font-weight: 700;
  margin-bottom: 1rem;
}

.body-text {
  color: var(--brand-silver);
  line-height: 1.7;
}

/* === App shell === */
.page {
  min-height: 100vh;
  padding-top: 4.5rem;
  background: var(--brand-black);
}

.container {
  max-width: 72rem;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.page-header {
  text-align: center;
  margin-bottom: 3rem;
}

/* === Navigation === */
.nav-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 1.5rem;
  height: 4.5rem;
  background: rgba(10, 10, 10, 0.92);
  border-bottom: 1px solid var(--brand-gray);
  backdrop-filter: blur(8px);
}

.nav-title {
  font-family: var(--font-heading);
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--brand-white);
  text-decoration: none;
  letter-spacing: 0.02em;
}

.nav-links {
  display: flex;
  gap: 0.25rem;
}

.nav-link {
  padding: 0.5rem 0.9rem;
  border-radius: 0.5rem;
  font-size: var(--text-sm);
  color: var(--brand-silver);
  text-decoration: none;
  transition: color var(--transition-fast), background var(--transition-fast);
}

.nav-link:hover {
  color: var(--brand-white);
  background: var(--brand-gray);
}

.nav-link.active {
  color: var(--brand-white);
  background: var(--brand-light-gray);
}

.nav-cta {
  padding: 0.5rem 1.1rem;
  border-radius: 0.5rem;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--brand-white);
  background: linear-gradient(135deg, var(--brand-dark), var(--brand-accent));
  text-decoration: none;
  transition: box-shadow var(--transition-normal);
}

.nav-cta:hover {
  box-shadow: 0 0 15px var(--accent-glow);
}

/* === Buttons === */
.btn-primary {
  padding: 0.8rem 1.5rem;
  border-radius: 0.5rem;
  font-size: var(--text-base);
  font-weight: 600;
  color: var(--brand-white);
  background: var(--brand-accent);
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 15px var(--accent-glow);
}

.btn-primary:disabled {
  background: var(--brand-light-gray);
  color: var(--brand-silver);
}

.btn-secondary {
  padding: 0.8rem 1.5rem;
  border-radius: 0.5rem;
  font-size: var(--text-base);
  font-weight: 500;
  color: var(--brand-white);
  background: var(--brand-light-gray);
  transition: background var(--transition-normal);
}

.btn-secondary:hover {
  background: var(--brand-gray);
}

.btn-ghost {
  color: var(--brand-silver);
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.btn-ghost:hover {
  color: var(--brand-white);
}

/* === Hero === */
.hero {
  padding: 6rem 1.5rem 4rem;
  text-align: center;
  background: linear-gradient(to right, var(--brand-black), var(--brand-gray));
}

.hero-eyebrow {
  display: inline-block;
  padding: 0.25rem 0.9rem;
  margin-bottom: 1rem;
  border-radius: 999px;
  background: var(--brand-gray);
  color: var(--brand-silver);
  font-size: var(--text-xs);
  font-weight: 500;
}

.hero-title {
  font-family: var(--font-heading);
  font-size: 3.25rem;
  font-weight: 800;
  line-height: 1.15;
  margin-bottom: 1.25rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
  margin-top: 2rem;
}

/* === Forms === */
.form-field {
  margin-bottom: 1.5rem;
}

.form-label {
  display: block;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--brand-silver);
  margin-bottom: 0.25rem;
}

.form-input,
.form-select,
.form-textarea {
  width: 100%;
  padding: 0.75rem 1rem;
  background: var(--brand-light-gray);
  border: 1px solid var(--brand-gray);
  border-radius: 0.375rem;
  color: var(--brand-white);
  outline: none;
  transition: box-shadow var(--transition-fast);
}

.form-input:focus,
.form-select:focus,
.form-textarea:focus {
  box-shadow: 0 0 0 2px var(--brand-accent);
}

.form-input.invalid,
.form-select.invalid,
.form-textarea.invalid {
  border-color: var(--danger);
}

.error-text {
  margin-top: 0.25rem;
  font-size: var(--text-sm);
  color: var(--danger);
}

.char-count {
  margin-top: 0.25rem;
  font-size: var(--text-xs);
  color: var(--brand-silver);
  text-align: right;
}

.form-hint {
  margin-top: 0.25rem;
  font-size: var(--text-xs);
  color: var(--brand-silver);
}

.form-panel {
  background: var(--brand-gray);
  padding: 2rem;
  border-radius: 0.75rem;
  box-shadow: 0 8px 16px rgba(0, 0, 0, 0.2);
}

/* === Gallery === */
.gallery-search {
  max-width: 28rem;
  margin: 0 auto 2rem;
  position: relative;
}

.gallery-search .form-input {
  padding-right: 3rem;
}

.search-clear {
  position: absolute;
  right: 1rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--brand-silver);
}

.filter-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.filter-chip {
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  font-size: var(--text-sm);
  font-weight: 500;
  background: var(--brand-gray);
  color: var(--brand-silver);
  transition: all var(--transition-fast);
}

.filter-chip:hover {
  color: var(--brand-white);
}

.filter-chip.active {
  background: var(--brand-white);
  color: var(--brand-black);
}

.sort-toggle {
  display: flex;
  background: var(--brand-gray);
  border-radius: 0.5rem;
  padding: 0.25rem;
  margin: 0 auto 2rem;
  width: fit-content;
}

.sort-toggle button {
  padding: 0.5rem 1rem;
  border-radius: 0.4rem;
  font-size: var(--text-sm);
  color: var(--brand-silver);
}

.sort-toggle button.active {
  background: var(--brand-white);
  color: var(--brand-black);
}

.results-count {
  text-align: center;
  color: var(--brand-silver);
  margin-bottom: 2rem;
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(17rem, 1fr));
  gap: 2rem;
}

.submission-card {
  background: var(--brand-dark);
  border: 1px solid var(--brand-gray);
  border-radius: 0.75rem;
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.submission-card:hover {
  transform: translateY(-3px);
  box-shadow: 0 8px 16px rgba(0, 0, 0, 0.4);
}

.submission-card__media {
  position: relative;
  aspect-ratio: 1 / 1;
  background: var(--brand-gray);
  overflow: hidden;
}

.submission-card__media img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.submission-card__play {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2rem;
  color: var(--brand-white);
  background: rgba(0, 0, 0, 0.35);
}

.submission-card__body {
  padding: 1.25rem;
}

.submission-card__title {
  font-family: var(--font-heading);
  font-size: var(--text-lg);
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.submission-card__meta {
  display: flex;
  align-items: center;
  justify-content: space-between;
  font-size: var(--text-xs);
  color: var(--brand-silver);
}

.creator-chip {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.creator-avatar {
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 999px;
  background: var(--brand-light-gray);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-xs);
  overflow: hidden;
}

.type-badge {
  position: absolute;
  top: 0.9rem;
  left: 0.9rem;
  padding: 0.2rem 0.75rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 500;
}

.type-badge.art {
  background: rgba(0, 255, 65, 0.12);
  color: var(--matrix-green);
  border: 1px solid rgba(0, 255, 65, 0.3);
}

.type-badge.photo {
  background: rgba(212, 175, 55, 0.12);
  color: var(--john-wick-gold);
  border: 1px solid rgba(212, 175, 55, 0.3);
}

.type-badge.video {
  background: rgba(220, 53, 69, 0.12);
  color: var(--neo-red);
  border: 1px solid rgba(220, 53, 69, 0.3);
}

.type-badge.other {
  background: var(--brand-light-gray);
  color: var(--brand-silver);
  border: 1px solid var(--brand-gray);
}

.featured-badge {
  position: absolute;
  top: 0.9rem;
  right: 0.9rem;
  padding: 0.2rem 0.75rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  background: rgba(212, 175, 55, 0.12);
  color: var(--john-wick-gold);
  border: 1px solid rgba(212, 175, 55, 0.3);
}

.empty-state {
  text-align: center;
  padding: 4rem 0;
  color: var(--brand-silver);
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(4px);
  overflow-y: auto;
}

.modal {
  background: var(--brand-dark);
  border: 1px solid var(--brand-gray);
  border-radius: 0.75rem;
  max-width: 42rem;
  width: 100%;
  max-height: 90vh;
  display: flex;
  flex-direction: column;
  overflow: hidden;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.5rem;
  border-bottom: 1px solid var(--brand-gray);
}

.modal-title {
  font-family: var(--font-heading);
  font-size: var(--text-xl);
  font-weight: 700;
}

.modal-close {
  padding: 0.4rem;
  border-radius: 999px;
  color: var(--brand-silver);
  font-size: var(--text-lg);
  line-height: 1;
}

.modal-close:hover {
  color: var(--brand-white);
  background: var(--brand-gray);
}

.modal-body {
  padding: 1.5rem;
  overflow-y: auto;
}

.modal-media img {
  width: 100%;
  max-height: 24rem;
  object-fit: contain;
  background: var(--brand-black);
  border-radius: 0.5rem;
}

.like-button {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.4rem 0.9rem;
  border-radius: 999px;
  background: var(--brand-gray);
  color: var(--brand-silver);
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.like-button.liked {
  color: var(--neo-red);
}

/* === Step indicator === */
.step-indicator {
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 1.5rem;
}

.step-dot {
  width: 2rem;
  height: 2rem;
  border-radius: 999px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--brand-gray);
  color: var(--brand-silver);
  font-size: var(--text-sm);
}

.step-dot.reached {
  background: var(--brand-white);
  color: var(--brand-black);
}

.step-bar {
  width: 4rem;
  height: 2px;
  background: var(--brand-gray);
}

.step-bar.reached {
  background: var(--brand-white);
}

/* === Upload drop zone === */
.drop-zone {
  border: 2px dashed var(--brand-light-gray);
  border-radius: 0.5rem;
  padding: 2rem;
  text-align: center;
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.drop-zone:hover {
  border-color: var(--brand-silver);
}

.drop-zone.invalid {
  border-color: var(--danger);
  background: rgba(239, 68, 68, 0.05);
}

.drop-zone.filled {
  border-color: rgba(0, 255, 65, 0.3);
  background: rgba(0, 255, 65, 0.04);
}

.upload-preview {
  max-height: 14rem;
  margin: 0 auto;
  border-radius: 0.375rem;
}

.upload-file-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--brand-silver);
}

/* === Challenge === */
.challenge-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
  gap: 1.5rem;
}

.challenge-card {
  background: var(--brand-gray);
  border: 1px solid rgba(61, 125, 255, 0.3);
  border-radius: 0.75rem;
  padding: 1.5rem;
  cursor: pointer;
  transition: border-color var(--transition-normal), transform var(--transition-normal);
}

.challenge-card:hover {
  border-color: var(--brand-accent);
  transform: scale(1.02);
}

.challenge-card__icon {
  width: 3rem;
  height: 3rem;
  border-radius: 999px;
  background: rgba(61, 125, 255, 0.2);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.4rem;
  margin-bottom: 1rem;
}

.challenge-card__title {
  font-family: var(--font-heading);
  font-size: var(--text-xl);
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.challenge-panel {
  background: var(--brand-gray);
  border-radius: 0.75rem;
  padding: 2rem;
  box-shadow: 0 8px 16px rgba(0, 0, 0, 0.2);
}

.challenge-panel__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.5rem;
}

.quiz-option {
  padding: 1rem;
  border-radius: 0.375rem;
  background: var(--brand-light-gray);
  border: 1px solid var(--brand-gray);
  cursor: pointer;
  margin-bottom: 0.75rem;
  transition: border-color var(--transition-fast);
}

.quiz-option:hover {
  border-color: var(--brand-silver);
}

.quiz-option.selected {
  background: rgba(61, 125, 255, 0.2);
  border-color: var(--brand-accent);
}

.quiz-progress {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-sm);
  color: var(--brand-silver);
  margin-bottom: 1rem;
}

.quiz-score-ring {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 5rem;
  height: 5rem;
  border-radius: 999px;
  border: 4px solid var(--brand-accent);
  background: var(--brand-dark);
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--brand-accent);
  margin-bottom: 1rem;
}

.recorder-stage {
  position: relative;
  aspect-ratio: 16 / 9;
  background: var(--brand-dark);
  border: 1px solid rgba(61, 125, 255, 0.3);
  border-radius: 0.5rem;
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--brand-silver);
  margin-bottom: 1.5rem;
}

.recording-pill {
  position: absolute;
  top: 1rem;
  right: 1rem;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.9rem;
  border-radius: 999px;
  background: rgba(18, 18, 18, 0.7);
  font-size: var(--text-sm);
}

.recording-dot {
  width: 0.7rem;
  height: 0.7rem;
  border-radius: 999px;
  background: var(--neo-red);
  animation: pulse-gentle 1.2s infinite;
}

.recorder-actions {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

/* === Member card === */
.member-card {
  position: relative;
  width: 100%;
  max-width: 30rem;
  aspect-ratio: 1.6 / 1;
  margin: 0 auto;
  border-radius: 0.75rem;
  overflow: hidden;
  border: 1px solid rgba(61, 125, 255, 0.3);
  background: linear-gradient(135deg, var(--brand-dark), var(--brand-accent));
  box-shadow: 0 0 10px rgba(255, 255, 255, 0.1);
}

.member-card.gold {
  background: linear-gradient(135deg, var(--card-gold-light), var(--card-gold), var(--card-amber));
  border-color: rgba(253, 224, 71, 0.5);
}

.member-card__inner {
  position: absolute;
  inset: 0;
  padding: 1.75rem;
  display: flex;
  flex-direction: column;
}

.member-card__top {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
}

.member-card__club {
  font-family: var(--font-heading);
  font-size: var(--text-2xl);
  font-weight: 700;
}

.member-card__club-sub {
  font-size: var(--text-xs);
  color: var(--brand-silver);
}

.member-card__seal {
  width: 4.5rem;
  height: 4.5rem;
  border-radius: 999px;
  background: var(--brand-dark);
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--john-wick-gold);
}

.member-card__bottom {
  margin-top: auto;
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
}

.member-card__field-label {
  font-size: var(--text-xs);
  color: var(--brand-silver);
  text-transform: uppercase;
}

.member-card__field-value {
  font-size: var(--text-base);
  font-weight: 500;
}

.member-card__name {
  font-size: var(--text-xl);
  font-weight: 600;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
  max-width: 16rem;
}

.member-card__qr {
  position: absolute;
  bottom: 1.5rem;
  right: 1.5rem;
  width: 4rem;
  height: 4rem;
  padding: 0.25rem;
  border-radius: 0.375rem;
  background: #ffffff;
}

.member-card__qr svg {
  width: 100%;
  height: 100%;
}

/* === Journal === */
.journal-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 1.5rem;
  margin-top: 2rem;
}

.blog-card {
  background: var(--brand-dark);
  border: 1px solid var(--brand-gray);
  border-radius: 0.75rem;
  padding: 1.5rem;
  transition: transform var(--transition-normal);
}

.blog-card:hover {
  transform: translateY(-3px);
}

.blog-card__category {
  display: inline-block;
  padding: 0.15rem 0.7rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  background: rgba(61, 125, 255, 0.15);
  color: var(--brand-accent);
  margin-bottom: 0.75rem;
}

.blog-card__title {
  font-family: var(--font-heading);
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.blog-card__meta {
  display: flex;
  gap: 0.75rem;
  font-size: var(--text-xs);
  color: var(--brand-silver);
  margin-top: 1rem;
}

/* === Pagination === */
.pagination {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 0.5rem;
  margin-top: 3rem;
}

.page-btn {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 999px;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--brand-silver);
  transition: background var(--transition-fast);
}

.page-btn:hover:not(:disabled) {
  background: var(--brand-gray);
  color: var(--brand-white);
}

.page-btn.current {
  background: var(--brand-light-gray);
  color: var(--brand-white);
  font-weight: 600;
}

.page-btn:disabled {
  color: var(--brand-gray);
}

.page-ellipsis {
  width: 2.5rem;
  text-align: center;
  color: var(--brand-silver);
}

/* === Timelines === */
.timeline {
  position: relative;
  margin-top: 2rem;
  padding-left: 2rem;
  border-left: 2px solid var(--brand-gray);
}

.timeline-entry {
  position: relative;
  padding-bottom: 2.5rem;
}

.timeline-entry::before {
  content: "";
  position: absolute;
  left: -2.55rem;
  top: 0.3rem;
  width: 0.9rem;
  height: 0.9rem;
  border-radius: 999px;
  background: var(--brand-accent);
  border: 2px solid var(--brand-black);
}

.timeline-year {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--brand-accent);
  margin-bottom: 0.25rem;
}

.timeline-title {
  font-family: var(--font-heading);
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 0.4rem;
}

.timeline-category {
  display: inline-block;
  margin-left: 0.5rem;
  padding: 0.1rem 0.6rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  background: var(--brand-gray);
  color: var(--brand-silver);
  vertical-align: middle;
}

/* === Story cards === */
.story-card {
  background: var(--brand-dark);
  border: 1px solid var(--brand-gray);
  border-radius: 0.75rem;
  padding: 1.5rem;
  margin-bottom: 1.5rem;
}

.story-card__byline {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 0.75rem;
  font-size: var(--text-sm);
  color: var(--brand-silver);
}

.story-card__content {
  color: var(--brand-silver);
  line-height: 1.7;
}

.story-card__content p {
  margin-bottom: 1rem;
}

.story-card audio {
  width: 100%;
  margin-top: 1rem;
}

.tag-chip {
  display: inline-block;
  margin: 0.15rem 0.3rem 0 0;
  padding: 0.1rem 0.6rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  background: var(--brand-gray);
  color: var(--brand-silver);
}

/* === Philanthropy === */
.stat-row {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
  gap: 2rem;
  text-align: center;
  margin: 3rem 0;
}

.stat-value {
  font-family: var(--font-heading);
  font-size: 3rem;
  font-weight: 700;
  color: var(--matrix-green);
}

.stat-label {
  color: var(--brand-silver);
}

.initiative-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
  gap: 1.5rem;
}

.initiative-card {
  background: var(--brand-dark);
  border: 1px solid var(--brand-gray);
  border-radius: 0.75rem;
  padding: 1.75rem;
}

.initiative-card h3 {
  font-family: var(--font-heading);
  margin: 0.75rem 0;
}

.partner-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem 2rem;
  margin-top: 2rem;
}

.partner-pill {
  padding: 0.6rem 1.25rem;
  border-radius: 999px;
  background: var(--brand-gray);
  color: var(--brand-silver);
  font-size: var(--text-sm);
}

/* === Banners === */
.notice-banner {
  background: var(--brand-gray);
  border: 1px solid var(--brand-light-gray);
  border-radius: 0.5rem;
  padding: 0.9rem 1.25rem;
  margin-bottom: 1.5rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
  color: var(--brand-silver);
}

.notice-banner.error {
  border-color: var(--danger);
  color: var(--danger);
}

/* === Markdown content === */
.prose p {
  margin-bottom: 1rem;
  color: var(--brand-silver);
  line-height: 1.75;
}

.prose h2, .prose h3 {
  font-family: var(--font-heading);
  color: var(--brand-white);
  margin: 1.5rem 0 0.75rem;
}

/* === Animations === */
@keyframes pulse-gentle {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.6; }
}

.spinner {
  display: inline-block;
  width: 1rem;
  height: 1rem;
  margin-right: 0.5rem;
  border: 2px solid rgba(245, 245, 245, 0.3);
  border-top-color: var(--brand-white);
  border-radius: 999px;
  animation: spin 0.8s linear infinite;
  vertical-align: -0.15rem;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}
"#;
