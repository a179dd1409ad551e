use crate::models::WidgetSnapshot;

pub fn render_index(snapshot: &WidgetSnapshot) -> String {
    let theme = snapshot.theme;
    let countdown = &snapshot.countdown;
    let headline = if snapshot.is_birthday {
        "🎉 Happy Birthday! 🎉"
    } else {
        "Birthday Countdown"
    };

    INDEX_HTML
        .replace("{{THEME_KIND}}", &format!("{:?}", theme.kind).to_lowercase())
        .replace("{{THEME_NAME}}", theme.name)
        .replace("{{BG_1}}", theme.background[0])
        .replace("{{BG_2}}", theme.background[1])
        .replace("{{BG_3}}", theme.background[2])
        .replace("{{CARD_BG}}", theme.card_bg)
        .replace("{{TEXT_1}}", theme.text_primary)
        .replace("{{TEXT_2}}", theme.text_secondary)
        .replace("{{ACCENT_1}}", theme.accent[0])
        .replace("{{ACCENT_2}}", theme.accent[1])
        .replace("{{GLOW}}", theme.glow)
        .replace("{{PARTICLES}}", theme.particles)
        .replace("{{HEADLINE}}", headline)
        .replace("{{TARGET}}", &snapshot.target_date)
        .replace("{{DAYS}}", &pad2(countdown.days))
        .replace("{{HOURS}}", &pad2(countdown.hours))
        .replace("{{MINUTES}}", &pad2(countdown.minutes))
        .replace("{{SECONDS}}", &pad2(countdown.seconds))
}

fn pad2(value: u64) -> String {
    format!("{value:02}")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Birthday Countdown</title>
  <style>
    :root {
      --bg-1: {{BG_1}};
      --bg-2: {{BG_2}};
      --bg-3: {{BG_3}};
      --card: {{CARD_BG}};
      --text-1: {{TEXT_1}};
      --text-2: {{TEXT_2}};
      --accent-1: {{ACCENT_1}};
      --accent-2: {{ACCENT_2}};
      --glow: {{GLOW}};
      --particles: {{PARTICLES}};
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      overflow-x: hidden;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2) 50%, var(--bg-3));
      color: var(--text-1);
      font-family: "Trebuchet MS", sans-serif;
      transition: background 1s ease;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
      user-select: none;
    }

    .app {
      position: relative;
      z-index: 20;
      width: min(900px, 100%);
      display: grid;
      gap: 28px;
      text-align: center;
    }

    h1 {
      font-size: clamp(2.2rem, 6vw, 4rem);
      margin: 0;
      text-shadow: 0 4px 24px rgba(0, 0, 0, 0.25);
    }

    .subtitle {
      margin: 0;
      color: var(--text-2);
    }

    .theme-name {
      font-size: 0.85rem;
      letter-spacing: 0.14em;
      text-transform: uppercase;
      color: var(--text-2);
    }

    .countdown {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 18px;
    }

    .card {
      position: relative;
      background: var(--card);
      backdrop-filter: blur(12px);
      border: 1px solid rgba(255, 255, 255, 0.4);
      border-radius: 24px;
      padding: 24px;
      box-shadow: 0 24px 60px rgba(0, 0, 0, 0.18);
    }

    .card::after {
      content: "";
      position: absolute;
      inset: 0;
      border-radius: inherit;
      background: var(--glow);
      filter: blur(24px);
      opacity: 0;
      transition: opacity 300ms ease;
      z-index: -1;
    }

    .card:hover::after {
      opacity: 0.7;
    }

    .value {
      font-family: ui-monospace, monospace;
      font-size: 3rem;
      font-weight: 700;
    }

    .label {
      color: var(--text-2);
      text-transform: capitalize;
      font-weight: 600;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 700;
      color: white;
      cursor: pointer;
      background: linear-gradient(90deg, var(--accent-1), var(--accent-2));
      box-shadow: 0 10px 24px rgba(0, 0, 0, 0.2);
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    button:disabled {
      cursor: default;
      animation: bounce 600ms ease infinite;
    }

    .ghost {
      background: rgba(255, 255, 255, 0.25);
      box-shadow: none;
      padding: 6px 12px;
    }

    .hug-message {
      min-height: 1.4em;
      font-size: 1.1rem;
    }

    .builder {
      display: grid;
      gap: 14px;
      text-align: left;
    }

    .builder[hidden] {
      display: none;
    }

    .row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .decorations {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 8px;
    }

    .decorations button {
      background: rgba(255, 255, 255, 0.2);
      box-shadow: none;
    }

    .decorations button.selected {
      background: linear-gradient(90deg, var(--accent-1), var(--accent-2));
    }

    select {
      border-radius: 12px;
      padding: 8px 10px;
      font-size: 1rem;
    }

    .cake {
      display: grid;
      justify-items: center;
      gap: 4px;
      font-size: 0.95rem;
    }

    .cake .candles {
      letter-spacing: 4px;
    }

    .cake .layer {
      border-radius: 10px;
      height: 26px;
      background: #8b5a2b;
      border-top: 6px solid #fff7e6;
    }

    .overlay {
      position: fixed;
      inset: 0;
      pointer-events: none;
      overflow: hidden;
    }

    .balloon {
      position: absolute;
      border-radius: 50% 50% 48% 48%;
      opacity: 0.8;
      display: grid;
      place-items: center;
      animation-name: rise;
      animation-iteration-count: infinite;
      animation-timing-function: ease-in-out;
    }

    .balloon.heart {
      border-radius: 50% 50% 50% 50% / 60% 60% 40% 40%;
    }

    .balloon.star {
      clip-path: polygon(50% 0%, 61% 35%, 98% 35%, 68% 57%, 79% 91%, 50% 70%, 21% 91%, 32% 57%, 2% 35%, 39% 35%);
    }

    .balloon.banner {
      border-radius: 12px;
      padding: 6px 12px;
      background: rgba(255, 255, 255, 0.9);
      color: #db2777;
      font-weight: 700;
      white-space: nowrap;
    }

    .confetti span {
      position: absolute;
      width: 12px;
      height: 12px;
      border-radius: 50%;
      background: var(--particles);
      animation: bounce 1.5s ease infinite;
    }

    .firework {
      position: fixed;
      width: 0;
      height: 0;
      pointer-events: none;
      z-index: 60;
    }

    .firework i {
      position: absolute;
      font-style: normal;
      animation: burst 1.8s ease-out forwards;
    }

    @keyframes rise {
      from {
        transform: translateY(0);
      }
      to {
        transform: translateY(-140vh);
      }
    }

    @keyframes bounce {
      0%, 100% {
        transform: translateY(0);
      }
      50% {
        transform: translateY(-12px);
      }
    }

    @keyframes burst {
      from {
        transform: translate(0, 0) scale(0.4);
        opacity: 1;
      }
      to {
        transform: translate(var(--dx), var(--dy)) scale(1.2);
        opacity: 0;
      }
    }
  </style>
</head>
<body data-theme="{{THEME_KIND}}">
  <div class="overlay" id="balloons"></div>
  <div class="overlay confetti" id="confetti"></div>
  <div id="fireworks"></div>

  <main class="app">
    <header>
      <div class="theme-name" id="theme-name">{{THEME_NAME}}</div>
      <h1 id="headline">{{HEADLINE}}</h1>
      <p class="subtitle" id="target">Counting down to {{TARGET}}</p>
    </header>

    <section class="countdown" id="countdown">
      <div class="card"><div class="value" id="days">{{DAYS}}</div><div class="label">days</div></div>
      <div class="card"><div class="value" id="hours">{{HOURS}}</div><div class="label">hours</div></div>
      <div class="card"><div class="value" id="minutes">{{MINUTES}}</div><div class="label">minutes</div></div>
      <div class="card"><div class="value" id="seconds">{{SECONDS}}</div><div class="label">seconds</div></div>
    </section>

    <section class="card">
      <p class="hug-message" id="hug-message"></p>
      <button id="hug-btn" type="button">Send a virtual hug 🤗</button>
      <p class="subtitle" id="hug-count"></p>
    </section>

    <section class="card">
      <div class="row">
        <strong>Virtual cake</strong>
        <button id="cake-open" type="button">Build a cake 🎂</button>
      </div>
      <div class="cake" id="built-cake"></div>

      <div class="builder" id="builder" hidden>
        <div class="row">
          <span>Layers</span>
          <span>
            <button class="ghost" type="button" data-adjust="layers" data-delta="-1">−</button>
            <strong id="layers"></strong>
            <button class="ghost" type="button" data-adjust="layers" data-delta="1">+</button>
          </span>
        </div>
        <div class="row">
          <span>Flavor</span>
          <select id="flavor">
            <option>chocolate</option>
            <option>vanilla</option>
            <option>strawberry</option>
            <option>red velvet</option>
            <option>lemon</option>
          </select>
        </div>
        <div class="row">
          <span>Frosting</span>
          <select id="frosting">
            <option>vanilla</option>
            <option>chocolate</option>
            <option>cream cheese</option>
            <option>strawberry</option>
            <option>caramel</option>
          </select>
        </div>
        <div class="decorations" id="decorations"></div>
        <div class="row">
          <span>Candles</span>
          <span>
            <button class="ghost" type="button" data-adjust="candles" data-delta="-1">−</button>
            <strong id="candles"></strong>
            <button class="ghost" type="button" data-adjust="candles" data-delta="1">+</button>
          </span>
        </div>
        <div class="cake" id="draft-cake"></div>
        <div class="row">
          <button class="ghost" id="cake-close" type="button">Close</button>
          <button id="cake-build" type="button">Build my cake ✨</button>
        </div>
      </div>
    </section>

    <p class="subtitle">Tap anywhere for fireworks.</p>
  </main>

  <script>
    const DECORATIONS = {
      sprinkles: '🌈',
      roses: '🌹',
      hearts: '💖',
      stars: '⭐',
      cherries: '🍒',
      berries: '🫐'
    };
    const FLAVOR_COLORS = {
      chocolate: '#7b3f00',
      vanilla: '#f3e5ab',
      strawberry: '#f9a8d4',
      'red velvet': '#b91c1c',
      lemon: '#fde047'
    };
    const FROSTING_COLORS = {
      vanilla: '#fffbeb',
      chocolate: '#5b2c06',
      'cream cheese': '#fef3c7',
      strawberry: '#fbcfe8',
      caramel: '#d97706'
    };

    const $ = (id) => document.getElementById(id);
    const pad = (value) => String(value).padStart(2, '0');
    let sceneDrawn = false;
    const liveFireworks = new Map();

    const post = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error(await res.text());
      }
      return res.json();
    };

    const applyTheme = (theme) => {
      const root = document.documentElement.style;
      root.setProperty('--bg-1', theme.background[0]);
      root.setProperty('--bg-2', theme.background[1]);
      root.setProperty('--bg-3', theme.background[2]);
      root.setProperty('--card', theme.card_bg);
      root.setProperty('--text-1', theme.text_primary);
      root.setProperty('--text-2', theme.text_secondary);
      root.setProperty('--accent-1', theme.accent[0]);
      root.setProperty('--accent-2', theme.accent[1]);
      root.setProperty('--glow', theme.glow);
      root.setProperty('--particles', theme.particles);
      document.body.dataset.theme = theme.kind;
      $('theme-name').textContent = theme.name;
    };

    const renderCake = (el, cake) => {
      const candles = '🕯️'.repeat(cake.candles);
      const layers = Array.from({ length: cake.layers }, (_, i) => {
        const width = 200 - i * 30;
        return `<div class="layer" style="width:${width}px;background:${FLAVOR_COLORS[cake.flavor]};border-top-color:${FROSTING_COLORS[cake.frosting]}"></div>`;
      }).reverse().join('');
      const toppings = cake.decorations.map((d) => DECORATIONS[d]).join(' ');
      el.innerHTML = `<div class="candles">${candles}</div>${layers}<div>${toppings}</div><div>${cake.layers}-layer ${cake.flavor} cake, ${cake.frosting} frosting</div>`;
    };

    const renderBuilder = (view) => {
      $('builder').hidden = !view.open;
      $('cake-open').hidden = view.open;
      $('layers').textContent = view.draft.layers;
      $('candles').textContent = view.draft.candles;
      $('flavor').value = view.draft.flavor;
      $('frosting').value = view.draft.frosting;
      $('decorations').innerHTML = Object.entries(DECORATIONS)
        .map(([name, emoji]) => {
          const selected = view.draft.decorations.includes(name) ? 'selected' : '';
          return `<button type="button" class="${selected}" data-decoration="${name}">${emoji}<br>${name}</button>`;
        })
        .join('');
      renderCake($('draft-cake'), view.draft);
      if (view.built) {
        renderCake($('built-cake'), view.built);
      }
    };

    const renderHug = (hug) => {
      $('hug-btn').disabled = hug.active;
      $('hug-btn').textContent = hug.active ? 'Hugging... 🤗' : 'Send a virtual hug 🤗';
      if (hug.message) {
        $('hug-message').textContent = hug.message;
      }
      if (hug.count > 0) {
        $('hug-count').textContent = `${hug.count} hug${hug.count !== 1 ? 's' : ''} shared 💕`;
      }
    };

    const drawScene = (scene) => {
      $('balloons').innerHTML = scene.balloons
        .map((b) => {
          const style = [
            `left:${b.start_x_pct}%`,
            `top:${b.start_y_pct}%`,
            `animation-duration:${b.duration_s}s`,
            `animation-delay:${b.delay_s}s`
          ];
          if (b.kind !== 'banner') {
            style.push(`width:${b.size_px}px`, `height:${b.size_px * 1.2}px`, `background:${b.color}`);
          }
          const cls = b.kind === 'banner' ? 'banner' : b.shape;
          return `<div class="balloon ${cls}" style="${style.join(';')}">${b.label || ''}</div>`;
        })
        .join('');
      $('confetti').innerHTML = scene.confetti
        .map((c) => `<span style="left:${c.left_pct}%;top:${c.top_pct}%;animation-delay:${c.delay_s}s;animation-duration:${c.duration_s}s"></span>`)
        .join('');
    };

    const fireworkKey = (id) => `${id.timestamp_ms}-${id.nonce}`;

    const renderFireworks = (fireworks) => {
      const container = $('fireworks');
      const keep = new Set(fireworks.map((f) => fireworkKey(f.id)));
      for (const [key, el] of liveFireworks) {
        if (!keep.has(key)) {
          el.remove();
          liveFireworks.delete(key);
        }
      }
      for (const firework of fireworks) {
        const key = fireworkKey(firework.id);
        if (liveFireworks.has(key)) {
          continue;
        }
        const el = document.createElement('div');
        el.className = 'firework';
        el.style.left = `${firework.x}px`;
        el.style.top = `${firework.y}px`;
        el.innerHTML = Array.from({ length: 12 }, (_, i) => {
          const angle = (i * 30 * Math.PI) / 180;
          const distance = 80 + Math.random() * 40;
          const dx = Math.cos(angle) * distance;
          const dy = Math.sin(angle) * distance;
          return `<i style="--dx:${dx}px;--dy:${dy}px">✦</i>`;
        }).join('');
        container.appendChild(el);
        liveFireworks.set(key, el);
      }
    };

    const render = (state) => {
      applyTheme(state.theme);
      $('headline').textContent = state.is_birthday ? '🎉 Happy Birthday! 🎉' : 'Birthday Countdown';
      $('target').textContent = state.is_birthday ? 'Celebration Mode Active 🎊' : `Counting down to ${state.target_date}`;
      $('countdown').hidden = state.is_birthday;
      $('days').textContent = pad(state.countdown.days);
      $('hours').textContent = pad(state.countdown.hours);
      $('minutes').textContent = pad(state.countdown.minutes);
      $('seconds').textContent = pad(state.countdown.seconds);
      $('confetti').hidden = !state.show_confetti;
      renderHug(state.hug);
      renderBuilder(state.cake);
      renderFireworks(state.fireworks);
      if (!sceneDrawn) {
        drawScene(state.scene);
        sceneDrawn = true;
      }
    };

    const refresh = async () => {
      const res = await fetch('/api/state');
      if (res.ok) {
        render(await res.json());
      }
    };

    const act = (promise) => promise.then(refresh).catch((err) => console.error(err));

    $('hug-btn').addEventListener('click', (event) => {
      event.stopPropagation();
      act(post('/api/hug'));
    });
    $('cake-open').addEventListener('click', (event) => {
      event.stopPropagation();
      act(post('/api/cake/open'));
    });
    $('cake-close').addEventListener('click', (event) => {
      event.stopPropagation();
      act(post('/api/cake/close'));
    });
    $('cake-build').addEventListener('click', (event) => {
      event.stopPropagation();
      act(post('/api/cake/build'));
    });
    $('flavor').addEventListener('change', (event) => act(post('/api/cake/flavor', { flavor: event.target.value })));
    $('frosting').addEventListener('change', (event) => act(post('/api/cake/frosting', { frosting: event.target.value })));
    $('builder').addEventListener('click', (event) => {
      event.stopPropagation();
      const adjust = event.target.closest('[data-adjust]');
      if (adjust) {
        act(post(`/api/cake/${adjust.dataset.adjust}`, { delta: Number(adjust.dataset.delta) }));
        return;
      }
      const decoration = event.target.closest('[data-decoration]');
      if (decoration) {
        act(post('/api/cake/decorations/toggle', { decoration: decoration.dataset.decoration }));
      }
    });

    const fire = (x, y) => act(post('/api/fireworks', { x, y }));
    document.addEventListener('click', (event) => fire(event.clientX, event.clientY));
    document.addEventListener('touchstart', (event) => {
      if (event.touches.length > 0) {
        fire(event.touches[0].clientX, event.touches[0].clientY);
      }
    });

    refresh();
    setInterval(refresh, 1000);
  </script>
</body>
</html>
"#;
