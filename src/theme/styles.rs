//! Global CSS styles for the Kolam Analyzer.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Backgrounds) */
  --ink: #0d0b0a;
  --ink-card: #17130f;
  --ink-border: #2a231b;

  /* SAFFRON (Titles, Primary Actions, Culture) */
  --saffron: #e8a33d;
  --saffron-glow: rgba(232, 163, 61, 0.3);

  /* NEON TEAL (Mathematics, Upload) */
  --neon: #00d4aa;
  --neon-glow: rgba(0, 212, 170, 0.3);

  /* MYSTIC VIOLET (Equations, Desmos) */
  --mystic: #9b7fd4;
  --mystic-glow: rgba(155, 127, 212, 0.3);

  --nature: #7cb87c;

  /* TEXT */
  --text-primary: #f7efe3;
  --text-muted: rgba(247, 239, 227, 0.6);

  --danger: #ff4d5e;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-devanagari: 'Noto Serif Devanagari', 'Cormorant Garamond', serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-serif);
  background: linear-gradient(135deg, var(--ink), var(--ink) 60%, var(--ink-card));
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

h1, h2, h3, h4 { font-weight: 600; }

.text-muted { color: var(--text-muted); }
.accent-saffron { color: var(--saffron); }
.accent-neon { color: var(--neon); }
.accent-mystic { color: var(--mystic); }
.accent-nature { color: var(--nature); }

.container { max-width: 72rem; margin: 0 auto; padding: 3rem 1.5rem; }
.container.narrow { max-width: 42rem; }

/* === Typography === */
.page-title {
  font-family: var(--font-devanagari);
  font-size: 3rem;
  color: var(--saffron);
  text-shadow: 0 0 30px var(--saffron-glow);
}

.tagline {
  font-size: 1.25rem;
  color: var(--text-muted);
  max-width: 40rem;
  margin: 0 auto;
}

/* === Hero === */
.hero {
  position: relative;
  overflow: hidden;
  padding: 5rem 1.5rem;
  text-align: center;
}

.hero__content { position: relative; display: grid; gap: 1.25rem; }
.hero__subtitle { font-size: 2.25rem; }
.hero__pills { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }

.pill {
  background: rgba(23, 19, 15, 0.6);
  border-radius: 999px;
  padding: 0.5rem 1rem;
  font-size: 0.875rem;
}

.section-intro { text-align: center; margin-bottom: 2rem; display: grid; gap: 0.75rem; }

.features {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
  gap: 2rem;
  text-align: center;
}

.footer {
  border-top: 1px solid var(--ink-border);
  padding: 2rem 1.5rem;
  text-align: center;
}

.footer__motto { font-family: var(--font-devanagari); margin-top: 0.5rem; }

/* === Cards === */
.cultural-border {
  border: 1px solid var(--ink-border);
  border-radius: 12px;
  background: var(--ink-card);
}

.sacred-glow { box-shadow: 0 0 24px rgba(232, 163, 61, 0.08); }

.section-card { padding: 1.75rem; margin-bottom: 2rem; }
.section-card__header { margin-bottom: 1.25rem; }
.section-card__title { display: flex; align-items: center; gap: 0.75rem; font-size: 1.35rem; }
.section-card__icon { font-size: 1.5rem; }

.badge-outline {
  border: 1px solid var(--mystic);
  border-radius: 999px;
  padding: 0.1rem 0.6rem;
  font-size: 0.75rem;
  color: var(--mystic);
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-mystic, .btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.7rem 1.6rem;
  border-radius: 6px;
  font-family: var(--font-mono);
  font-size: 0.95rem;
  cursor: pointer;
  text-decoration: none;
  transition: all var(--transition-normal);
}

.btn-primary {
  background: linear-gradient(90deg, var(--saffron), #f2c26b);
  border: none;
  color: var(--ink);
}

.btn-outline {
  background: transparent;
  border: 1px solid var(--ink-border);
  color: var(--text-primary);
}

.btn-mystic {
  background: linear-gradient(90deg, var(--mystic), #c1a9f0);
  border: none;
  color: var(--ink);
}

.btn-ghost { background: transparent; border: none; color: var(--text-muted); }

.btn-primary:hover:not(:disabled),
.btn-mystic:hover:not(:disabled) { box-shadow: 0 0 20px var(--saffron-glow); }
.btn-outline:hover:not(:disabled) { border-color: var(--neon); }

button:disabled { opacity: 0.5; cursor: not-allowed; }

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-muted);
  font-size: 1.25rem;
  cursor: pointer;
}

/* === Upload === */
.upload-zone {
  border: 2px dashed var(--ink-border);
  border-radius: 10px;
  padding: 3rem;
  text-align: center;
  transition: all var(--transition-normal);
}

.upload-zone.dragover {
  border-color: var(--neon);
  box-shadow: 0 0 30px var(--neon-glow);
}

.upload-zone__empty, .upload-zone__selected { display: grid; gap: 1rem; justify-items: center; }
.upload-zone__icon { font-size: 3.5rem; color: var(--neon); }
.upload-zone__preview { max-width: 12rem; max-height: 12rem; border-radius: 8px; }
.upload-zone__name { font-size: 1.1rem; }

.kolam-pattern {
  background-image: radial-gradient(circle, rgba(232, 163, 61, 0.12) 1.5px, transparent 1.5px);
  background-size: 24px 24px;
}

.math-grid {
  background-image:
    linear-gradient(rgba(0, 212, 170, 0.06) 1px, transparent 1px),
    linear-gradient(90deg, rgba(0, 212, 170, 0.06) 1px, transparent 1px);
  background-size: 20px 20px;
}

/* === Results === */
.results__grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
  gap: 1.5rem;
}

.results__prose { padding: 1.5rem; border-radius: 8px; font-family: var(--font-devanagari); }
.results__row { display: flex; align-items: center; justify-content: space-between; }

.results__pre {
  font-family: var(--font-mono);
  font-size: 0.85rem;
  white-space: pre-wrap;
  padding: 1rem;
  border-radius: 8px;
  color: var(--text-muted);
}

.results__pre--mystic { border: 1px solid var(--mystic-glow); color: var(--text-primary); }

.results__image {
  aspect-ratio: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  border: 1px solid var(--neon-glow);
  border-radius: 8px;
  margin-top: 1rem;
}

.results__image img { max-width: 100%; max-height: 100%; }
.results__placeholder { text-align: center; color: var(--neon); }
.results__desmos { display: grid; gap: 1rem; justify-items: center; align-content: center; }

/* === Gallery === */
.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
  gap: 1.5rem;
}

.gallery__tile {
  border: 1px solid var(--ink-border);
  border-radius: 10px;
  padding: 1rem;
  display: grid;
  gap: 0.5rem;
}

.gallery__art {
  aspect-ratio: 1;
  display: grid;
  place-content: center;
  text-align: center;
  color: var(--nature);
}

.gallery__art img { width: 100%; border-radius: 6px; }
.gallery__tile--more { place-content: center; text-align: center; border-style: dashed; }
.gallery__actions { display: flex; justify-content: center; margin-top: 1.5rem; }

.complexity { display: flex; align-items: center; gap: 0.5rem; }
.complexity__dots { display: flex; gap: 0.25rem; }
.complexity__dot { width: 8px; height: 8px; border-radius: 50%; background: var(--ink-border); }
.complexity__dot.filled { background: var(--saffron); }
.complexity__label { font-size: 0.75rem; color: var(--text-muted); }

/* === Analysis Page === */
.analysis-header { display: flex; align-items: center; gap: 1.5rem; margin-bottom: 2rem; }
.analysis-header .page-title { font-family: var(--font-serif); font-size: 2rem; }

.processing { text-align: center; padding: 3rem 0; }

.analysis-error {
  border: 1px solid var(--danger);
  border-radius: 8px;
  padding: 1rem;
  color: var(--danger);
  margin-bottom: 2rem;
}

/* === Lifecycle Badge === */
.lifecycle-badge {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-left: auto;
  font-family: var(--font-mono);
  font-size: 0.85rem;
  color: var(--text-muted);
}

.lifecycle-badge.complete { color: var(--nature); }
.lifecycle-badge.failed { color: var(--danger); }

.status-dot { width: 8px; height: 8px; border-radius: 50%; background: var(--ink-border); }

.status-dot.active {
  background: var(--neon);
  box-shadow: 0 0 10px var(--neon);
  animation: pulse 2s ease-in-out infinite;
}

/* === Spinners & Motion === */
.spinner {
  width: 1rem;
  height: 1rem;
  border: 2px solid var(--ink);
  border-top-color: transparent;
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

.spinner--large {
  width: 4rem;
  height: 4rem;
  border: 4px solid var(--saffron);
  border-top-color: transparent;
  margin: 0 auto 1rem;
}

.mandala-spin { display: inline-block; animation: spin 12s linear infinite; }
.neon-pulse { animation: neon-pulse 2.5s ease-in-out infinite; }

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.6; }
}

@keyframes neon-pulse {
  0%, 100% { text-shadow: 0 0 4px var(--neon-glow); }
  50% { text-shadow: 0 0 16px var(--neon); }
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  display: grid;
  gap: 0.75rem;
  z-index: 100;
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 1rem;
  min-width: 18rem;
  padding: 1rem 1.25rem;
  border-radius: 8px;
  background: var(--ink-card);
  border: 1px solid var(--ink-border);
  animation: toast-in 200ms ease;
}

.toast--error { border-color: var(--danger); }
.toast__title { font-weight: 600; }
.toast__description { font-size: 0.875rem; color: var(--text-muted); }

@keyframes toast-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
