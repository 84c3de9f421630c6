pub const HOME_STYLES: &str = r#"
/* Navigation */
.main-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  height: var(--header-height);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
  transition: transform var(--transition-modal) var(--easing-standard);
}

.main-nav.nav-hidden {
  transform: translateY(-100%);
}

.nav-container {
  max-width: var(--container-width);
  height: 100%;
  margin: 0 auto;
  padding: 0 var(--space-4);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-links {
  display: flex;
  gap: var(--space-4);
}

.nav-link {
  color: var(--text-primary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
}

.nav-link.active {
  color: var(--primary);
}

.nav-controls {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.icon-btn {
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.25rem;
  padding: var(--space-2);
  cursor: pointer;
}

.mobile-menu-btn {
  display: none;
}

.mobile-menu {
  background-color: var(--surface);
  border-top: 1px solid var(--border);
}

.mobile-nav-link {
  display: block;
  padding: var(--space-3) var(--space-4);
  color: var(--text-primary);
}

.mobile-nav-link.active {
  background-color: var(--primary);
  color: var(--text-inverse);
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .mobile-menu-btn {
    display: block;
  }
}

/* Back to top */
.back-to-top {
  position: fixed;
  right: var(--space-8);
  bottom: var(--space-8);
  z-index: 30;
  width: 48px;
  height: 48px;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  color: var(--text-inverse);
  cursor: pointer;
  transition: opacity var(--transition-modal) var(--easing-standard),
              transform var(--transition-modal) var(--easing-standard);
}

.back-to-top.concealed {
  opacity: 0;
  transform: translateY(40px);
  visibility: hidden;
}

/* Sections */
.page-section {
  padding: var(--space-16) var(--space-4);
  max-width: var(--container-width);
  margin: 0 auto;
}

.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding-top: calc(var(--header-height) + var(--space-12));
}

.hero-title {
  font-size: 3rem;
  font-weight: 800;
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin: var(--space-4) 0 var(--space-8);
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-8);
}

.about-text {
  max-width: 720px;
  margin: 0 auto var(--space-8);
  text-align: center;
  color: var(--text-secondary);
}

.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: var(--space-6);
}

.skill-card {
  padding: var(--space-6);
  border-radius: var(--radius-xl);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.logo {
  color: var(--text-primary);
  text-decoration: none;
}

.section-heading {
  margin-bottom: var(--space-4);
}

.contact-card {
  padding: var(--space-8);
  border-radius: var(--radius-xl);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.site-footer {
  padding: var(--space-8);
  text-align: center;
  color: var(--text-secondary);
  border-top: 1px solid var(--border);
}
"#;
