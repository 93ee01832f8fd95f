//! Static pages: the landing page at `/` and the submissions dashboard at
//! `/dashboard`.
//!
//! Both pages are embedded HTML constants served as-is — no template
//! engine, no asset pipeline. The landing page carries the three-step
//! lead form; the dashboard fetches `/submissions` and renders a table.

use std::sync::Arc;

use axum::Router;
use axum::response::Html;
use axum::routing::get;

use crate::state::AppState;

/// Build the pages router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(landing_page))
        .route("/dashboard", get(dashboard_page))
}

async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

/// Landing page with the three-step lead form.
const LANDING_PAGE: &str = r##"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>Captura — Vendemos tu casa</title>
<style>
:root{--primary:#2b6cb0;--danger:#e53e3e;--text:#1a202c;--muted:#718096;--border:#e2e8f0}
*{box-sizing:border-box;margin:0}
body{font-family:system-ui,sans-serif;color:var(--text);background:#f7fafc}
.hero{max-width:640px;margin:48px auto 24px;text-align:center;padding:0 16px}
.hero h1{font-size:32px;margin-bottom:8px}
.hero p{color:var(--muted)}
.form-card{max-width:520px;margin:0 auto 64px;background:#fff;border:1px solid var(--border);border-radius:12px;padding:28px}
.progress{display:flex;gap:8px;margin-bottom:24px}
.progress-step{flex:1;height:6px;border-radius:3px;background:var(--border)}
.progress-step.active{background:var(--primary)}
.form-step{display:none}
.form-step.active{display:block}
.form-step h2{font-size:18px;margin-bottom:16px}
label{display:block;font-size:14px;font-weight:600;margin:12px 0 4px}
input[type=text],input[type=email],input[type=tel],select{width:100%;padding:10px;border:1px solid var(--border);border-radius:6px;font-size:15px}
input.error{border-color:var(--danger)}
.error-message{color:var(--danger);font-size:.875rem;margin-top:.25rem}
.buttons{display:flex;justify-content:space-between;margin-top:20px}
button{padding:10px 22px;border:none;border-radius:6px;font-size:15px;cursor:pointer}
.btn-next,.btn-submit{background:var(--primary);color:#fff}
.btn-prev{background:var(--border)}
button:disabled{opacity:.6;cursor:wait}
.form-message{padding:12px 15px;margin:15px 0;border-radius:4px;font-size:14px}
.form-message.success{background:#d4edda;color:#155724;border:1px solid #c3e6cb}
.form-message.error{background:#f8d7da;color:#721c24;border:1px solid #f5c6cb}
.privacy{display:flex;align-items:center;gap:8px;margin-top:12px;font-size:13px;color:var(--muted)}
</style>
</head>
<body>
<div class="hero">
  <h1>Vendemos tu casa sin complicaciones</h1>
  <p>Cuéntanos sobre tu vivienda y te llamamos en menos de 24 horas.</p>
</div>
<div class="form-card">
  <div id="form-notice"></div>
  <div class="progress">
    <div class="progress-step active" data-step="0"></div>
    <div class="progress-step" data-step="1"></div>
    <div class="progress-step" data-step="2"></div>
  </div>
  <form id="lead-form" novalidate>
    <div class="form-step active">
      <h2>Tu vivienda</h2>
      <label for="property_type">Tipo de vivienda</label>
      <select id="property_type" name="property_type" required>
        <option value="casa">Casa</option>
        <option value="piso">Piso</option>
        <option value="chalet">Chalet</option>
        <option value="atico">Ático</option>
        <option value="otro">Otro</option>
      </select>
      <label for="postal_code">Código postal</label>
      <input type="text" id="postal_code" name="postal_code" inputmode="numeric" required/>
      <div class="buttons"><span></span><button type="button" class="btn-next">Siguiente</button></div>
    </div>
    <div class="form-step">
      <h2>Dirección</h2>
      <label for="address">Dirección (opcional)</label>
      <input type="text" id="address" name="address"/>
      <div class="buttons"><button type="button" class="btn-prev">Atrás</button><button type="button" class="btn-next">Siguiente</button></div>
    </div>
    <div class="form-step">
      <h2>Contacto</h2>
      <label for="name">Nombre</label>
      <input type="text" id="name" name="name" required/>
      <label for="phone">Teléfono</label>
      <input type="tel" id="phone" name="phone" inputmode="numeric" required/>
      <label for="email">Correo electrónico</label>
      <input type="email" id="email" name="email" required/>
      <div class="privacy">
        <input type="checkbox" id="privacy" name="privacy" required/>
        <label for="privacy" style="margin:0;font-weight:400">Acepto la política de privacidad</label>
      </div>
      <div class="buttons"><button type="button" class="btn-prev">Atrás</button><button type="submit" class="btn-submit">Enviar</button></div>
    </div>
  </form>
</div>
<script>
(function(){
  var form=document.getElementById('lead-form');
  var steps=Array.prototype.slice.call(form.querySelectorAll('.form-step'));
  var marks=document.querySelectorAll('.progress-step');
  var current=0;
  function show(i){
    steps.forEach(function(s,j){s.classList.toggle('active',j===i)});
    marks.forEach(function(m,j){m.classList.toggle('active',j<=i)});
    current=i;
  }
  function fail(field,msg){
    clear(field);
    field.classList.add('error');
    var el=document.createElement('div');
    el.className='error-message';
    el.textContent=msg;
    field.parentNode.insertBefore(el,field.nextSibling);
  }
  function clear(field){
    field.classList.remove('error');
    var el=field.parentNode.querySelector('.error-message');
    if(el)el.remove();
  }
  function validateStep(i){
    var ok=true;
    steps[i].querySelectorAll('[required]').forEach(function(field){
      var v=(field.value||'').trim();
      if(field.type==='checkbox'?!field.checked:!v){ok=false;fail(field,'Este campo es obligatorio');return}
      clear(field);
      if(field.type==='email'&&!/^[^\s@]+@[^\s@]+\.[^\s@]+$/.test(v)){ok=false;fail(field,'Por favor, introduce un correo electrónico válido')}
      if(field.name==='postal_code'&&!/^\d{5}$/.test(v)){ok=false;fail(field,'Por favor, introduce un código postal válido de 5 dígitos')}
      if(field.name==='phone'&&!/^\d{9}$/.test(v)){ok=false;fail(field,'Por favor, introduce un número de teléfono válido de 9 dígitos')}
    });
    return ok;
  }
  function notice(text,kind){
    var box=document.getElementById('form-notice');
    box.innerHTML='';
    var el=document.createElement('div');
    el.className='form-message '+kind;
    el.textContent=text;
    box.appendChild(el);
    if(kind==='success')setTimeout(function(){el.remove()},5000);
  }
  form.querySelectorAll('.btn-next').forEach(function(b){
    b.addEventListener('click',function(){if(validateStep(current))show(Math.min(current+1,steps.length-1))});
  });
  form.querySelectorAll('.btn-prev').forEach(function(b){
    b.addEventListener('click',function(){if(current>0)show(current-1)});
  });
  form.addEventListener('submit',function(e){
    e.preventDefault();
    for(var i=0;i<steps.length;i++){if(!validateStep(i)){show(i);return}}
    var btn=form.querySelector('.btn-submit');
    var label=btn.textContent;
    btn.disabled=true;btn.textContent='Enviando...';
    var tipo=form.property_type.value||'casa';
    var data={
      name:form.name.value||'',
      email:form.email.value||'',
      phone:form.phone.value||'',
      address:form.address.value||'No proporcionada',
      postal_code:form.postal_code.value||'',
      property_type:tipo,
      property_owner:'propietario',
      message:'Tipo de vivienda: '+tipo
    };
    fetch('/submit',{method:'POST',headers:{'Content-Type':'application/json'},body:JSON.stringify(data)})
      .then(function(r){return r.text().then(function(t){return{ok:r.ok,body:t?JSON.parse(t):{}}})})
      .then(function(res){
        if(res.ok){
          notice('¡Gracias por contactarnos! Nos pondremos en contacto contigo pronto.','success');
          form.reset();show(0);
        }else{
          notice(res.body.message||res.body.error||'Error al enviar el formulario','error');
        }
      })
      .catch(function(){notice('Hubo un error al enviar el formulario. Por favor, inténtalo de nuevo.','error')})
      .finally(function(){btn.disabled=false;btn.textContent=label});
  });
})();
</script>
</body>
</html>
"##;

/// Submissions dashboard. Read-only, no auth — keep it off the public
/// internet.
const DASHBOARD_PAGE: &str = r##"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>Captura — Solicitudes</title>
<style>
body{font-family:system-ui,sans-serif;color:#1a202c;background:#f7fafc;margin:0;padding:32px}
h1{font-size:24px;margin-bottom:4px}
p.sub{color:#718096;margin:0 0 24px}
table{width:100%;border-collapse:collapse;background:#fff;border:1px solid #e2e8f0;border-radius:8px}
th,td{text-align:left;padding:10px 14px;border-bottom:1px solid #e2e8f0;font-size:14px}
th{background:#edf2f7;font-size:12px;text-transform:uppercase;letter-spacing:.04em;color:#4a5568}
tr:last-child td{border-bottom:none}
.empty{color:#718096;padding:24px;text-align:center}
</style>
</head>
<body>
<h1>Solicitudes recibidas</h1>
<p class="sub">Todas las solicitudes del formulario, en orden de llegada.</p>
<table>
  <thead>
    <tr><th>Fecha</th><th>Nombre</th><th>Teléfono</th><th>Email</th><th>C.P.</th><th>Vivienda</th><th>Dirección</th></tr>
  </thead>
  <tbody id="rows"><tr><td colspan="7" class="empty">Cargando…</td></tr></tbody>
</table>
<script>
fetch('/submissions')
  .then(function(r){return r.json()})
  .then(function(list){
    var rows=document.getElementById('rows');
    rows.innerHTML='';
    if(!list.length){
      rows.innerHTML='<tr><td colspan="7" class="empty">Todavía no hay solicitudes.</td></tr>';
      return;
    }
    list.forEach(function(s){
      var tr=document.createElement('tr');
      ['timestamp','name','phone','email','postal_code','property_type','address'].forEach(function(k){
        var td=document.createElement('td');
        td.textContent=s[k]||'';
        tr.appendChild(td);
      });
      rows.appendChild(tr);
    });
  })
  .catch(function(){
    document.getElementById('rows').innerHTML='<tr><td colspan="7" class="empty">No se pudieron cargar las solicitudes.</td></tr>';
  });
</script>
</body>
</html>
"##;
