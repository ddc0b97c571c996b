// keyframes behind common::motion
//
// .reveal elements stay hidden until the observer marks them .in-view; .enter
// elements play straight away.  both read their delay from --motion-delay
pub const ANIMATIONS: &str = r#"
@keyframes motion-up {
  from { opacity: 0; transform: translateY(20px); }
  to   { opacity: 1; transform: none; }
}

@keyframes motion-left {
  from { opacity: 0; transform: translateX(-50px); }
  to   { opacity: 1; transform: none; }
}

@keyframes motion-right {
  from { opacity: 0; transform: translateX(50px); }
  to   { opacity: 1; transform: none; }
}

@keyframes motion-scale {
  from { opacity: 0; transform: translateY(30px) scale(0.95); }
  to   { opacity: 1; transform: none; }
}

@keyframes motion-fade {
  from { opacity: 0; }
  to   { opacity: 1; }
}

@keyframes banner-in {
  from { opacity: 0; transform: translateY(-10px); }
  to   { opacity: 1; transform: none; }
}

@keyframes bounce-cue {
  0%, 100% { transform: translate(-50%, 0); }
  50%      { transform: translate(-50%, 10px); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50%      { opacity: 0.5; }
}

@keyframes caret-blink {
  0%, 100% { opacity: 1; }
  50%      { opacity: 0; }
}

.reveal {
  opacity: 0;
}

.reveal.in-view,
.enter {
  animation-duration: 600ms;
  animation-timing-function: var(--easing-out);
  animation-fill-mode: both;
  animation-delay: var(--motion-delay, 0ms);
}

.reveal.in-view.motion-up,    .enter.motion-up    { animation-name: motion-up; }
.reveal.in-view.motion-left,  .enter.motion-left  { animation-name: motion-left; }
.reveal.in-view.motion-right, .enter.motion-right { animation-name: motion-right; }
.reveal.in-view.motion-scale, .enter.motion-scale { animation-name: motion-scale; }
.reveal.in-view.motion-fade,  .enter.motion-fade  { animation-name: motion-fade; }

/* hover/tap feedback shared by links and buttons */
.press {
  transition: transform var(--transition-fast) var(--easing-standard);
}

.press:hover {
  transform: scale(1.05);
}

.press:active {
  transform: scale(0.95);
}

.lift:hover {
  transform: translateY(-2px);
}

@media (prefers-reduced-motion: reduce) {
  .reveal {
    opacity: 1;
  }

  .reveal.in-view,
  .enter {
    animation: none;
  }

  .skill-bar-fill {
    transition: none;
  }
}
"#;
