pub const SECTION_STYLES: &str = r#"
/* Page Layout */
.app-root {
  min-height: 100vh;
  background-color: var(--background);
  color: var(--text-primary);
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.section {
  padding: var(--space-20) 0;
  scroll-margin-top: 72px;
}

.section-alt {
  background-color: var(--background-alt);
}

/* Header */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  padding: var(--space-6) 0;
  background-color: transparent;
  transition: background-color var(--transition-normal) var(--easing-standard),
              padding var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.site-header.scrolled {
  padding: var(--space-3) 0;
  background-color: var(--header-glass);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-md);
}

.header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  border: none;
  background: none;
  cursor: pointer;
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--accent-text);
}

.nav-desktop {
  display: none;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  border: none;
  background: none;
  cursor: pointer;
  font: inherit;
  font-weight: 500;
  color: var(--text-secondary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--accent-text);
}

.header-actions {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.menu-toggle {
  display: inline-flex;
  padding: var(--space-2);
  border: none;
  background: none;
  cursor: pointer;
  color: var(--text-secondary);
}

.mobile-menu {
  margin-top: var(--space-4);
  padding: var(--space-4) 0;
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
  animation: banner-in 200ms var(--easing-out) both;
}

.mobile-menu nav {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.mobile-nav-link {
  display: block;
  padding: var(--space-2) 0;
  border: none;
  background: none;
  cursor: pointer;
  text-align: left;
  font: inherit;
  font-weight: 500;
  color: var(--text-secondary);
}

.mobile-nav-link:hover {
  color: var(--accent-text);
}

@media (min-width: 768px) {
  .nav-desktop {
    display: flex;
  }

  .menu-toggle,
  .mobile-menu {
    display: none;
  }
}

/* Hero */
.hero {
  position: relative;
  display: flex;
  align-items: center;
  min-height: 100vh;
  padding-top: var(--space-20);
  overflow: hidden;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  z-index: 0;
  background-image: linear-gradient(135deg, var(--primary-soft), var(--background), var(--background-alt));
}

.hero-grid {
  position: relative;
  z-index: 1;
  display: grid;
  gap: var(--space-12);
  align-items: center;
}

.hero-copy {
  text-align: center;
}

.hero-greeting {
  margin-bottom: var(--space-2);
  font-size: 1.125rem;
  font-weight: 500;
  color: var(--accent-text);
}

.hero-role {
  min-height: 1.3em;
  margin-bottom: var(--space-6);
  font-size: clamp(2.25rem, 6vw, 3.75rem);
  font-weight: 700;
  line-height: 1.2;
}

.caret {
  display: inline-block;
  width: 3px;
  height: 1em;
  margin-left: var(--space-1);
  vertical-align: -0.1em;
  background-color: var(--accent-text);
  animation: caret-blink 1s steps(1) infinite;
}

.hero-tagline {
  max-width: 36rem;
  margin: 0 auto var(--space-8);
  font-size: 1.125rem;
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
}

.hero-portrait {
  display: flex;
  justify-content: center;
}

.portrait-ring {
  width: 256px;
  height: 256px;
  padding: 6px;
  border-radius: var(--radius-full);
  background-image: linear-gradient(to right, var(--primary), var(--secondary));
  box-shadow: var(--shadow-xl);
}

.portrait-ring img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: var(--radius-full);
  border: 4px solid var(--background);
}

.scroll-cue {
  position: absolute;
  bottom: var(--space-10);
  left: 50%;
  z-index: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  border: none;
  background: none;
  cursor: pointer;
  font-size: 0.875rem;
  color: var(--text-tertiary);
  animation: bounce-cue 2s var(--easing-standard) infinite;
}

.scroll-cue:hover {
  color: var(--accent-text);
}

@media (min-width: 768px) {
  .hero-grid {
    grid-template-columns: 1fr 1fr;
  }

  .hero-copy {
    text-align: left;
  }

  .hero-tagline {
    margin-left: 0;
  }

  .hero-actions {
    justify-content: flex-start;
  }

  .portrait-ring {
    width: 320px;
    height: 320px;
  }
}

/* About */
.about-grid {
  display: grid;
  gap: var(--space-12);
  align-items: center;
}

.about-image {
  width: 100%;
  max-width: 420px;
  margin: 0 auto;
  display: block;
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-xl);
}

.about-headline {
  margin-bottom: var(--space-4);
  font-size: 1.5rem;
  font-weight: 700;
}

.about-paragraph {
  margin-bottom: var(--space-6);
  color: var(--text-secondary);
}

.fact-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-4);
  margin-bottom: var(--space-8);
}

.fact {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--text-secondary);
}

.fact strong {
  color: var(--text-primary);
}

.fact-dot {
  flex-shrink: 0;
  width: 8px;
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--accent-text);
}

.about-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
}

@media (min-width: 640px) {
  .fact-grid {
    grid-template-columns: 1fr 1fr;
  }
}

@media (min-width: 768px) {
  .about-grid {
    grid-template-columns: 1fr 1fr;
  }
}

/* Projects */
.projects-section {
  position: relative;
  overflow: hidden;
  background-image: linear-gradient(135deg, var(--neutral-50), #FFFFFF, var(--primary-soft));
}

.projects-section--dark {
  background-image: linear-gradient(135deg, var(--neutral-950), var(--neutral-900), #312E81);
}

.project-grid {
  display: grid;
  gap: var(--space-8);
}

.project-card {
  position: relative;
  display: flex;
  flex-direction: column;
  height: 100%;
  overflow: hidden;
  border-radius: var(--radius-2xl);
  border: 1px solid rgba(229, 231, 235, 0.5);
  background-color: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(12px);
  transition: transform var(--transition-slow) var(--easing-standard),
              box-shadow var(--transition-slow) var(--easing-standard);
}

.project-card--dark {
  border-color: rgba(55, 65, 81, 0.5);
  background-color: rgba(31, 41, 55, 0.5);
}

.project-card:hover {
  transform: translateY(-10px) scale(1.02);
  box-shadow: 0 25px 50px -12px rgba(99, 102, 241, 0.25);
}

.project-card--dark:hover {
  box-shadow: 0 25px 50px -12px rgba(99, 102, 241, 0.2);
}

.project-image-wrap {
  position: relative;
  height: 192px;
  overflow: hidden;
}

.project-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 700ms var(--easing-standard);
}

.project-card:hover .project-image {
  transform: scale(1.1);
}

.project-overlay {
  position: absolute;
  inset: 0;
  opacity: 0;
  background-image: linear-gradient(to top, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.2), transparent);
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.project-card:hover .project-overlay {
  opacity: 1;
}

.featured-badge {
  position: absolute;
  top: var(--space-4);
  left: var(--space-4);
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-image: linear-gradient(to right, var(--primary), var(--secondary));
  color: var(--text-inverse);
  font-size: 0.75rem;
  font-weight: 600;
}

.project-body {
  display: flex;
  flex: 1;
  flex-direction: column;
  padding: var(--space-6);
}

.project-title {
  margin-bottom: var(--space-3);
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--neutral-900);
}

.project-card--dark .project-title {
  color: #FFFFFF;
}

.project-desc {
  flex: 1;
  margin-bottom: var(--space-4);
  font-size: 0.875rem;
  color: var(--neutral-600);
}

.project-card--dark .project-desc {
  color: var(--neutral-300);
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

.project-actions {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.project-action {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-lg);
  font-size: 0.875rem;
  font-weight: 500;
  background-color: var(--neutral-100);
  color: var(--neutral-700);
}

.project-action:hover {
  background-color: var(--neutral-200);
}

.project-action.live {
  background-color: var(--primary-soft);
  color: var(--primary-dark);
}

.project-card--dark .project-action {
  background-color: var(--neutral-700);
  color: var(--neutral-300);
}

.project-card--dark .project-action.live {
  background-color: rgba(99, 102, 241, 0.2);
  color: var(--primary-light);
}

.section-footer {
  margin-top: var(--space-16);
  text-align: center;
}

@media (min-width: 768px) {
  .project-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (min-width: 1024px) {
  .project-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

/* Skills */
.skills-grid {
  display: grid;
  gap: var(--space-12);
}

.skill-column-title {
  margin-bottom: var(--space-6);
  font-size: 1.25rem;
  font-weight: 600;
}

.skill-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.skill-card {
  padding: var(--space-4);
  border-radius: var(--radius-xl);
  border: 1px solid var(--border);
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.skill-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-2);
}

.skill-name {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  font-weight: 600;
}

.skill-name img {
  width: 28px;
  height: 28px;
  object-fit: contain;
}

.skill-level {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.skill-bar {
  height: 8px;
  overflow: hidden;
  border-radius: var(--radius-full);
  background-color: var(--neutral-200);
}

:root.dark .skill-bar {
  background-color: var(--neutral-700);
}

/* the bar grows to --level once its card scrolls into view */
.skill-bar-fill {
  width: 0;
  height: 100%;
  border-radius: var(--radius-full);
  background-color: var(--skill-color, var(--primary));
  transition: width 1s var(--easing-out);
}

.in-view .skill-bar-fill {
  width: var(--level);
}

.skill-desc {
  margin-top: var(--space-2);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

@media (min-width: 768px) {
  .skills-grid {
    grid-template-columns: 1fr 1fr;
  }
}

/* Experience */
.experience-section {
  position: relative;
  overflow: hidden;
  background-image: linear-gradient(135deg, var(--neutral-50), #FFFFFF, var(--primary-soft));
}

.experience-section--dark {
  background-image: linear-gradient(135deg, var(--neutral-950), var(--neutral-900), #312E81);
}

.timeline {
  position: relative;
  max-width: 64rem;
  margin: 0 auto;
}

.timeline-line {
  position: absolute;
  top: 0;
  bottom: 0;
  left: 24px;
  width: 2px;
  background-image: linear-gradient(to bottom, var(--primary), var(--secondary), var(--primary));
}

.timeline-item {
  position: relative;
  margin-bottom: var(--space-12);
  padding-left: 64px;
}

.timeline-dot {
  position: absolute;
  top: var(--space-8);
  left: 16px;
  width: 18px;
  height: 18px;
  border-radius: var(--radius-full);
  border: 4px solid var(--background);
  background-image: linear-gradient(to right, var(--primary), var(--secondary));
  box-shadow: var(--shadow-lg);
}

.timeline-card {
  padding: var(--space-8);
  border-radius: var(--radius-2xl);
  border: 1px solid rgba(229, 231, 235, 0.5);
  background-color: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-lg);
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.timeline-card--dark {
  border-color: rgba(55, 65, 81, 0.5);
  background-color: rgba(31, 41, 55, 0.5);
}

.timeline-card:hover {
  transform: scale(1.02);
  box-shadow: var(--shadow-xl);
}

.timeline-head {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
}

.company-logo {
  width: 56px;
  height: 56px;
  object-fit: cover;
  border-radius: var(--radius-xl);
}

.timeline-role {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--neutral-900);
}

.timeline-card--dark .timeline-role {
  color: #FFFFFF;
}

.timeline-company {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-weight: 600;
  color: var(--primary-dark);
}

.timeline-card--dark .timeline-company {
  color: var(--primary-light);
}

.timeline-meta {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
  font-size: 0.875rem;
  color: var(--neutral-500);
}

.timeline-card--dark .timeline-meta {
  color: var(--neutral-400);
}

.timeline-meta span {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
}

.timeline-highlights {
  margin-bottom: var(--space-6);
  list-style: none;
}

.timeline-highlights li {
  display: flex;
  align-items: flex-start;
  gap: var(--space-2);
  margin-bottom: var(--space-2);
  color: var(--neutral-600);
}

.timeline-card--dark .timeline-highlights li {
  color: var(--neutral-300);
}

.timeline-highlights .icon {
  margin-top: 4px;
  color: var(--primary);
}

.timeline-tech {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

@media (min-width: 768px) {
  .timeline-line {
    left: 50%;
    transform: translateX(-50%);
  }

  .timeline-item {
    width: 50%;
    padding-left: 0;
  }

  .timeline-item.left {
    padding-right: var(--space-12);
  }

  .timeline-item.right {
    margin-left: 50%;
    padding-left: var(--space-12);
  }

  .timeline-item.left .timeline-dot {
    left: auto;
    right: -9px;
  }

  .timeline-item.right .timeline-dot {
    left: -9px;
  }
}

/* Contact */
.contact-grid {
  display: grid;
  gap: var(--space-12);
}

.contact-info-title {
  margin-bottom: var(--space-6);
  font-size: 1.5rem;
  font-weight: 700;
}

.contact-info-text {
  margin-bottom: var(--space-8);
  color: var(--text-secondary);
}

.contact-details {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  margin-bottom: var(--space-8);
}

.contact-detail {
  display: flex;
  align-items: flex-start;
  gap: var(--space-4);
}

.contact-detail-icon {
  display: inline-flex;
  padding: var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--primary-soft);
  color: var(--accent-text);
}

.contact-detail-label {
  font-weight: 600;
}

.contact-detail-value {
  color: var(--text-secondary);
}

.contact-detail-value:hover {
  color: var(--accent-text);
}

.contact-card {
  padding: var(--space-8);
  border-radius: var(--radius-xl);
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
}

@media (min-width: 1024px) {
  .contact-grid {
    grid-template-columns: 1fr 1fr;
  }
}

/* Footer */
.site-footer {
  padding: var(--space-12) 0;
  border-top: 1px solid var(--border);
  background-color: var(--background);
}

.footer-grid {
  display: grid;
  gap: var(--space-8);
}

.footer-brand {
  margin-bottom: var(--space-4);
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--accent-text);
}

.footer-blurb {
  max-width: 28rem;
  margin-bottom: var(--space-6);
  color: var(--text-secondary);
}

.footer-heading {
  margin-bottom: var(--space-4);
  font-size: 1.125rem;
  font-weight: 600;
}

.footer-links {
  list-style: none;
}

.footer-links li {
  margin-bottom: var(--space-2);
}

.footer-link {
  border: none;
  background: none;
  cursor: pointer;
  font: inherit;
  color: var(--text-secondary);
}

.footer-link:hover {
  color: var(--accent-text);
}

.footer-contact p {
  margin-bottom: var(--space-2);
  color: var(--text-secondary);
}

.footer-bottom {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
  margin-top: var(--space-12);
  padding-top: var(--space-8);
  border-top: 1px solid var(--border);
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.back-to-top {
  display: inline-flex;
  padding: var(--space-3);
  border: none;
  border-radius: var(--radius-full);
  cursor: pointer;
  background-color: var(--primary-soft);
  color: var(--accent-text);
}

@media (min-width: 768px) {
  .footer-grid {
    grid-template-columns: 2fr 1fr 1fr;
  }

  .footer-bottom {
    flex-direction: row;
  }
}

/* Not found */
.not-found {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-4);
  min-height: 100vh;
  padding: var(--space-8);
  text-align: center;
}

.not-found-code {
  font-size: 4rem;
  font-weight: 800;
  color: var(--accent-text);
}

.not-found-text {
  color: var(--text-secondary);
}

.not-found-path {
  font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
  color: var(--text-tertiary);
}
"#;
